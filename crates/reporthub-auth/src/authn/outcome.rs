//! Authentication and registration outcome unions.

use serde::{Deserialize, Serialize};

/// The result of an authentication attempt.
///
/// A tagged union rather than a (flag, error, data) triple: a caller can
/// never observe a success flag with a populated error or vice versa.
/// Constructed fresh per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthOutcome {
    /// Credentials verified; identity and claims resolved.
    Success {
        /// Authenticated user's ID.
        user_id: i64,
        /// Authenticated user's username.
        username: String,
        /// Role names resolved for the user.
        roles: Vec<String>,
        /// Permission names resolved for the user.
        permissions: Vec<String>,
    },
    /// Authentication was refused with a user-facing reason.
    Failure {
        /// User-facing failure message.
        reason: String,
    },
}

impl AuthOutcome {
    /// Constructs a failure outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Returns whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Failure { reason } => Some(reason),
            Self::Success { .. } => None,
        }
    }
}

/// The result of a registration attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegisterOutcome {
    /// The user record was created and its role assigned.
    Created,
    /// Registration was refused with a user-facing reason.
    Rejected {
        /// User-facing rejection message.
        reason: String,
    },
}

impl RegisterOutcome {
    /// Constructs a rejection outcome.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns whether the registration went through.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}
