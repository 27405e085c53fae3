//! Access token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use reporthub_core::config::auth::AuthConfig;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;

use super::claims::Claims;

/// Validates access tokens issued by [`super::JwtEncoder`].
///
/// Any holder of the shared secret can validate a token without a round
/// trip to the issuer. There is no revocation mechanism: a token stays
/// valid until its expiry instant.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    ///
    /// The secret, issuer, and audience must match the issuing side or
    /// every token will fail validation.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew tolerance
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature, expiry, issuer, and audience.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::authentication("Invalid token issuer")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::authentication("Invalid token audience")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            jwt_issuer: "reporthub".to_string(),
            jwt_audience: "reporthub-client".to_string(),
            jwt_ttl_minutes: 60,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_claims_round_trip_exactly() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg).unwrap();
        let decoder = JwtDecoder::new(&cfg);

        let token = encoder
            .issue(
                7,
                "alice",
                vec!["Admin".to_string()],
                vec!["ViewReport".to_string()],
            )
            .unwrap();

        let claims = decoder.decode(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.unique_name, "alice");
        assert_eq!(claims.role, vec!["Admin".to_string()]);
        assert_eq!(claims.permission, vec!["ViewReport".to_string()]);
        assert_eq!(claims.iss, "reporthub");
        assert_eq!(claims.aud, "reporthub-client");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_fails_signature_validation() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg).unwrap();
        let token = encoder.issue(1, "alice", vec![], vec![]).unwrap();

        let other = AuthConfig {
            jwt_secret: "another-secret-another-secret-32".to_string(),
            ..config()
        };
        let decoder = JwtDecoder::new(&other);
        assert!(decoder.decode(&token).is_err());
    }

    #[test]
    fn test_expired_token_fails_validation() {
        let cfg = config();
        let decoder = JwtDecoder::new(&cfg);

        let now = Utc::now();
        let claims = Claims {
            sub: "1".to_string(),
            unique_name: "alice".to_string(),
            role: vec![],
            permission: vec![],
            iss: cfg.jwt_issuer.clone(),
            aud: cfg.jwt_audience.clone(),
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode("not.a.token").is_err());
    }
}
