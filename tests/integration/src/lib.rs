//! Integration test utilities for the HavenBridge back office
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API. Tests are skipped unless `DATABASE_URL` (and, for the admin
//! flows, `TEST_ADMIN_EMAIL`/`TEST_ADMIN_PASSWORD`) are set.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
