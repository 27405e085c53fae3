//! The login state machine and registration flow.

use std::sync::Arc;

use tracing::{info, warn};

use reporthub_core::error::ErrorKind;
use reporthub_core::result::AppResult;
use reporthub_entity::user::CreateUser;

use crate::gateway::{CredentialStore, RolePermissionResolver};
use crate::password::PasswordHasher;

use super::outcome::{AuthOutcome, RegisterOutcome};
use super::request::{LoginRequest, RegisterRequest};

/// Missing username or password.
const MSG_CREDENTIALS_REQUIRED: &str = "Username and password are required.";
/// Unknown username and wrong password share one message so a caller
/// cannot probe which usernames exist.
const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials.";
/// Account exists but is deactivated.
const MSG_USER_INACTIVE: &str = "User is inactive. Please contact Administrator.";
/// Stored credential material failed to decode.
const MSG_CREDENTIALS_CORRUPT: &str =
    "Stored password hash or salt is invalid. Please contact Administrator.";
/// Registration against a taken username.
const MSG_USERNAME_TAKEN: &str = "Username already exists.";

/// Verifies credentials and assembles authorization claims.
///
/// Holds no per-request state; every attempt runs the same sequence of
/// lookup, verification, and claim resolution against the injected
/// collaborators. Store and resolver faults propagate as errors; refused
/// attempts are captured as [`AuthOutcome::Failure`].
#[derive(Clone)]
pub struct Authenticator {
    /// Credential record lookup and creation.
    store: Arc<dyn CredentialStore>,
    /// Role and permission name resolution.
    resolver: Arc<dyn RolePermissionResolver>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator over the given collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        resolver: Arc<dyn RolePermissionResolver>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            store,
            resolver,
            hasher,
        }
    }

    /// Authenticates a username/password pair.
    ///
    /// Roles and permissions are resolved only after the password check
    /// passes; an inactive account is refused before any hashing work.
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<AuthOutcome> {
        if request.username.trim().is_empty() || request.password.trim().is_empty() {
            return Ok(self.deny(&request.username, MSG_CREDENTIALS_REQUIRED));
        }

        let Some(user) = self.store.find_by_username(&request.username).await? else {
            return Ok(self.deny(&request.username, MSG_INVALID_CREDENTIALS));
        };

        if !user.is_active {
            return Ok(self.deny(&request.username, MSG_USER_INACTIVE));
        }

        match self.hasher.try_verify(
            &request.password,
            &user.password_hash,
            &user.password_salt,
        ) {
            Ok(true) => {}
            Ok(false) => return Ok(self.deny(&request.username, MSG_INVALID_CREDENTIALS)),
            Err(e) if e.kind == ErrorKind::Corruption => {
                return Ok(self.deny(&request.username, MSG_CREDENTIALS_CORRUPT));
            }
            Err(e) => return Err(e),
        }

        let roles = self.resolver.roles_of(user.user_id).await?;
        let permissions = self.resolver.permissions_of(user.user_id).await?;

        info!(username = %user.username, "User logged in successfully");

        Ok(AuthOutcome::Success {
            user_id: user.user_id,
            username: user.username,
            roles,
            permissions,
        })
    }

    /// Registers a new active user and assigns the requested role.
    ///
    /// `create` and `assign_role` are two independent store calls; a
    /// failed role assignment leaves the created record in place.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<RegisterOutcome> {
        if self
            .store
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            warn!(username = %request.username, reason = MSG_USERNAME_TAKEN, "Registration refused");
            return Ok(RegisterOutcome::rejected(MSG_USERNAME_TAKEN));
        }

        let (password_hash, password_salt) = self.hasher.derive(&request.password);

        let user_id = self
            .store
            .create(&CreateUser {
                username: request.username.clone(),
                email: request.email.clone(),
                password_hash,
                password_salt,
                is_active: true,
            })
            .await?;

        self.store.assign_role(user_id, request.role_id).await?;

        info!(username = %request.username, user_id, "User registered");

        Ok(RegisterOutcome::Created)
    }

    /// Logs and captures a refused attempt.
    fn deny(&self, username: &str, reason: &'static str) -> AuthOutcome {
        warn!(username = %username, reason = %reason, "Login failed");
        AuthOutcome::failure(reason)
    }
}
