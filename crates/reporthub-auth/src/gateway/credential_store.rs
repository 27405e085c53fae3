//! Credential store gateway.

use async_trait::async_trait;

use reporthub_core::result::AppResult;
use reporthub_entity::user::{CreateUser, User};

/// Lookup and creation of credential records.
///
/// Implementations fail with a store-level error on connectivity or
/// constraint violations; an absent record is `Ok(None)`, not an error.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Finds a credential record by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Finds a credential record by user ID.
    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>>;

    /// Creates a new credential record and returns its generated ID.
    async fn create(&self, user: &CreateUser) -> AppResult<i64>;

    /// Assigns a role to an existing user.
    async fn assign_role(&self, user_id: i64, role_id: i64) -> AppResult<()>;

    /// Lists all credential records.
    async fn find_all(&self) -> AppResult<Vec<User>>;
}
