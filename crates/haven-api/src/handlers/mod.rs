//! HTTP handlers

pub mod appointments;
pub mod auth;
pub mod careers;
pub mod health;
pub mod messages;
pub mod overview;

use serde::Deserialize;

/// Optional status filter accepted by the admin list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}
