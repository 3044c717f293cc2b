//! Request extractors

mod auth;
mod validated;

pub use auth::AdminUser;
pub use validated::ValidatedJson;
