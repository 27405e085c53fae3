//! The complete login flow: authenticate, mint a token, record the event.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use reporthub_auth::authn::{AuthOutcome, Authenticator, LoginRequest, RegisterOutcome, RegisterRequest};
use reporthub_auth::client::ClientInfo;
use reporthub_auth::gateway::LoginEventRecorder;
use reporthub_auth::jwt::JwtEncoder;
use reporthub_core::result::AppResult;
use reporthub_entity::login::CreateLoginLog;

/// Login instants are recorded in the deployment's local time zone,
/// fixed at UTC+05:30.
const LOGIN_TZ_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Payload returned to a successfully authenticated client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Authenticated user's ID.
    pub user_id: i64,
    /// Authenticated user's username.
    pub username: String,
    /// Signed access token.
    pub token: String,
    /// Role names resolved for the user.
    pub roles: Vec<String>,
    /// Permission names resolved for the user.
    pub permissions: Vec<String>,
}

/// The outcome of a full login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginOutcome {
    /// Authentication succeeded; token minted and event recorded.
    Granted(LoginResponse),
    /// Authentication was refused with a user-facing reason.
    Denied {
        /// User-facing failure message.
        reason: String,
    },
}

/// Orchestrates authentication, token issuance, and login auditing.
#[derive(Clone)]
pub struct LoginService {
    /// Credential verification and claim assembly.
    authenticator: Authenticator,
    /// Access token issuer.
    encoder: Arc<JwtEncoder>,
    /// Login event persistence.
    recorder: Arc<dyn LoginEventRecorder>,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService")
            .field("authenticator", &self.authenticator)
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        authenticator: Authenticator,
        encoder: Arc<JwtEncoder>,
        recorder: Arc<dyn LoginEventRecorder>,
    ) -> Self {
        Self {
            authenticator,
            encoder,
            recorder,
        }
    }

    /// Runs the full login flow for a credential pair.
    ///
    /// Only a successful attempt produces a login event; refused attempts
    /// surface as [`LoginOutcome::Denied`] and are traced by the
    /// authenticator.
    pub async fn login(
        &self,
        request: &LoginRequest,
        client: &ClientInfo,
    ) -> AppResult<LoginOutcome> {
        let outcome = self.authenticator.authenticate(request).await?;

        let (user_id, username, roles, permissions) = match outcome {
            AuthOutcome::Failure { reason } => return Ok(LoginOutcome::Denied { reason }),
            AuthOutcome::Success {
                user_id,
                username,
                roles,
                permissions,
            } => (user_id, username, roles, permissions),
        };

        let token = self
            .encoder
            .issue(user_id, &username, roles.clone(), permissions.clone())?;

        let event = CreateLoginLog {
            user_id,
            device: Some(client.device.clone()),
            browser: Some(client.browser.clone()),
            ip_address: Some(client.ip_address.clone()),
            login_time: login_instant(),
            logout_time: None,
            is_success: true,
        };
        let log_id = self.recorder.record(&event).await?;

        info!(username = %username, log_id, "Login event recorded");

        Ok(LoginOutcome::Granted(LoginResponse {
            user_id,
            username,
            token,
            roles,
            permissions,
        }))
    }

    /// Registers a new user; pass-through to the authenticator.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<RegisterOutcome> {
        self.authenticator.register(request).await
    }
}

/// The current instant in the fixed login time zone.
fn login_instant() -> DateTime<FixedOffset> {
    let tz = FixedOffset::east_opt(LOGIN_TZ_OFFSET_SECS).expect("offset is within +/-24h");
    Utc::now().with_timezone(&tz)
}
