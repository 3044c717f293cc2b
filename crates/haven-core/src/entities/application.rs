//! Career application entity - a public job application with a stored resume

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::RequestStatus;

/// Career application lifecycle.
///
/// Created as `New`; admins move it through review. `Shortlisted` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    New,
    Reviewing,
    Shortlisted,
    Rejected,
}

impl RequestStatus for ApplicationStatus {
    const ENTITY: &'static str = "career application";

    fn all() -> &'static [Self] {
        &[Self::New, Self::Reviewing, Self::Shortlisted, Self::Rejected]
    }

    fn initial() -> Self {
        Self::New
    }

    fn is_terminal(self) -> bool {
        matches!(self, Self::Shortlisted | Self::Rejected)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Reviewing => "REVIEWING",
            Self::Shortlisted => "SHORTLISTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored career application. `resume_path` points at the uploaded file
/// relative to the resume store root; the file is owned 1:1 by this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerApplication {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub cover_letter: Option<String>,
    pub resume_path: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating a career application. The resume has
/// already been validated and persisted by the time this exists.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub cover_letter: Option<String>,
    pub resume_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(ApplicationStatus::Shortlisted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::New.is_terminal());
        assert!(!ApplicationStatus::Reviewing.is_terminal());
    }
}
