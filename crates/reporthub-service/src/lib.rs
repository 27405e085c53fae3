//! # reporthub-service
//!
//! Business logic services for ReportHub. Composes the authentication
//! core with token issuance and login event auditing, and exposes the
//! sanitized user directory.

pub mod auth;
pub mod user;

pub use auth::{LoginOutcome, LoginResponse, LoginService};
pub use user::UserDirectory;
