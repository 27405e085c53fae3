//! Login orchestration.

pub mod service;

pub use service::{LoginOutcome, LoginResponse, LoginService};
