//! Role and permission resolver gateway.

use async_trait::async_trait;

use reporthub_core::result::AppResult;

/// Resolves role names and permission names for a user.
///
/// The permission list is the distinct union across all of the user's
/// assigned roles; the resolver owns that dedup, not the caller.
#[async_trait]
pub trait RolePermissionResolver: Send + Sync {
    /// Returns the role names assigned to the user.
    async fn roles_of(&self, user_id: i64) -> AppResult<Vec<String>>;

    /// Returns the permission names granted to the user.
    async fn permissions_of(&self, user_id: i64) -> AppResult<Vec<String>>;
}
