//! Contact message entity - a public inquiry with an optional admin reply

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::RequestStatus;

/// Contact message lifecycle. `Replied` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
}

impl RequestStatus for MessageStatus {
    const ENTITY: &'static str = "contact message";

    fn all() -> &'static [Self] {
        &[Self::Unread, Self::Read, Self::Replied]
    }

    fn initial() -> Self {
        Self::Unread
    }

    fn is_terminal(self) -> bool {
        matches!(self, Self::Replied)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "UNREAD",
            Self::Read => "READ",
            Self::Replied => "REPLIED",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored contact message. `replied_at` is stamped when an admin reply is
/// recorded, at which point the status becomes `Replied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub replied_at: Option<DateTime<Utc>>,
}

/// Validated payload for creating a contact message.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replied_is_only_terminal() {
        assert!(MessageStatus::Replied.is_terminal());
        assert!(!MessageStatus::Unread.is_terminal());
        assert!(!MessageStatus::Read.is_terminal());
    }
}
