//! Access token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use reporthub_core::config::auth::AuthConfig;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;

use super::claims::Claims;

/// Minimum HMAC-SHA256 signing key length in bytes.
pub(crate) const MIN_SECRET_LEN: usize = 32;

/// Creates signed access tokens for authenticated identities.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Issuer claim value.
    issuer: String,
    /// Audience claim value.
    audience: String,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Rejects signing secrets shorter than the HMAC-SHA256 output size,
    /// so a weak key is caught at startup rather than at issue time.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(AppError::configuration(format!(
                "Signing secret must be at least {MIN_SECRET_LEN} bytes, got {}",
                config.jwt_secret.len()
            )));
        }
        if config.jwt_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "Token TTL must be at least one minute",
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            ttl_minutes: config.jwt_ttl_minutes as i64,
        })
    }

    /// Issues a signed access token for an authenticated identity.
    ///
    /// The claim set carries the subject ID, username, one claim per role,
    /// and one claim per permission. Expiry is issued-at plus the
    /// configured TTL.
    pub fn issue(
        &self,
        user_id: i64,
        username: &str,
        roles: Vec<String>,
        permissions: Vec<String>,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            unique_name: username.to_string(),
            role: roles,
            permission: permissions,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}
