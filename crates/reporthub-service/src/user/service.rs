//! Sanitized user directory listing.

use std::sync::Arc;

use reporthub_auth::gateway::CredentialStore;
use reporthub_core::result::AppResult;
use reporthub_entity::user::UserSummary;

/// Lists registered users without exposing credential material.
#[derive(Clone)]
pub struct UserDirectory {
    /// Credential record lookup.
    store: Arc<dyn CredentialStore>,
}

impl UserDirectory {
    /// Creates a new user directory service.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Returns a sanitized projection of every registered user.
    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        let users = self.store.find_all().await?;
        Ok(users.iter().map(UserSummary::from).collect())
    }
}
