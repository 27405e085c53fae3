//! Login event entities.

pub mod model;

pub use model::{CreateLoginLog, LoginLog};
