//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The token settings must be identical between the issuing and validating
/// parties, and the hash settings between deriving and verifying calls,
/// or verification will always fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Must be at least
    /// 32 bytes long.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Issuer claim stamped into every access token.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Audience claim stamped into every access token.
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_minutes: u64,
    /// PBKDF2 iteration count for password hashing.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Derived hash length in bytes.
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_issuer(),
            jwt_audience: default_audience(),
            jwt_ttl_minutes: default_ttl(),
            hash_iterations: default_hash_iterations(),
            hash_length: default_hash_length(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION_MIN_32_BYTES!".to_string()
}

fn default_issuer() -> String {
    "reporthub".to_string()
}

fn default_audience() -> String {
    "reporthub-client".to_string()
}

fn default_ttl() -> u64 {
    60
}

fn default_hash_iterations() -> u32 {
    10_000
}

fn default_hash_length() -> usize {
    32
}
