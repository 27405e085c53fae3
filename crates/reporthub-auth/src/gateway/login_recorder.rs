//! Login event recorder gateway.

use async_trait::async_trait;

use reporthub_core::result::AppResult;
use reporthub_entity::login::CreateLoginLog;

/// Persists login attempt records for the audit log.
#[async_trait]
pub trait LoginEventRecorder: Send + Sync {
    /// Records a login event and returns its generated ID.
    async fn record(&self, event: &CreateLoginLog) -> AppResult<i64>;
}
