//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AdminRepository, AppointmentStore, ApplicationStore, AuditLogRepository, MessageStore,
    ReplyRepository, RepoResult, RequestRepository,
};
