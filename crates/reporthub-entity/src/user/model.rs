//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user in the ReportHub system.
///
/// The password hash and salt are stored base64-encoded and never leave
/// the credential store boundary: both are skipped during serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub user_id: i64,
    /// Unique login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Base64-encoded PBKDF2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Base64-encoded password salt.
    #[serde(skip_serializing)]
    pub password_salt: String,
    /// Whether the account may log in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-derived base64 password hash.
    pub password_hash: String,
    /// Base64 salt matching the hash.
    pub password_salt: String,
    /// Whether the account starts active.
    pub is_active: bool,
}

/// Sanitized user projection for directory listings.
///
/// Carries no credential material at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique user identifier.
    pub user_id: i64,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the account may log in.
    pub is_active: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
        }
    }
}
