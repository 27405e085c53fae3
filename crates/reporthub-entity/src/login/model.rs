//! Login event entity model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An immutable record of a login attempt.
///
/// Owned by the audit log. Nothing in the authentication core ever updates
/// a recorded entry; `logout_time` exists for a future logout path and is
/// always `None` at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLog {
    /// Unique log entry identifier.
    pub log_id: i64,
    /// The user who logged in.
    pub user_id: i64,
    /// Device label derived from the User-Agent.
    pub device: Option<String>,
    /// Browser label derived from the User-Agent.
    pub browser: Option<String>,
    /// Source IP address of the client.
    pub ip_address: Option<String>,
    /// Login instant in the configured local time zone.
    pub login_time: DateTime<FixedOffset>,
    /// Logout instant; never set by the authentication core.
    pub logout_time: Option<DateTime<FixedOffset>>,
    /// Whether the attempt succeeded.
    pub is_success: bool,
}

/// Data required to record a new login event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoginLog {
    /// The user who logged in.
    pub user_id: i64,
    /// Device label derived from the User-Agent.
    pub device: Option<String>,
    /// Browser label derived from the User-Agent.
    pub browser: Option<String>,
    /// Source IP address of the client.
    pub ip_address: Option<String>,
    /// Login instant in the configured local time zone.
    pub login_time: DateTime<FixedOffset>,
    /// Always `None` at creation.
    pub logout_time: Option<DateTime<FixedOffset>>,
    /// Whether the attempt succeeded.
    pub is_success: bool,
}
