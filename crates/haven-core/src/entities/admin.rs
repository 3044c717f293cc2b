//! Administrator entity

use chrono::{DateTime, Utc};

/// Back-office administrator account.
///
/// The password hash is deliberately not part of the entity; repositories
/// expose it through a dedicated lookup so it never travels with profile
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
