//! Access token claims payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;

/// Claims payload embedded in every access token.
///
/// The token is self-contained: subject identity, username, and the full
/// set of role and permission claims travel with it, so downstream
/// services can authorize requests without a round trip to the issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID, rendered as a string.
    pub sub: String,
    /// Username of the authenticated user.
    pub unique_name: String,
    /// One entry per role granted to the user.
    #[serde(default)]
    pub role: Vec<String>,
    /// One entry per permission granted to the user.
    #[serde(default)]
    pub permission: Vec<String>,
    /// Token issuer.
    pub iss: String,
    /// Intended audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the subject parsed back into a numeric user ID.
    pub fn user_id(&self) -> AppResult<i64> {
        self.sub
            .parse()
            .map_err(|_| AppError::validation(format!("Non-numeric token subject: '{}'", self.sub)))
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
