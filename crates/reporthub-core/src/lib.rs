//! # reporthub-core
//!
//! Core crate for ReportHub. Contains configuration schemas, the logging
//! bootstrap, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ReportHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
