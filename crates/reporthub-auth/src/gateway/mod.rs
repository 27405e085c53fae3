//! Capability traits for the external collaborators of the auth core.
//!
//! The credential store, role/permission resolver, and login event
//! recorder are injected as trait objects so the core can be exercised
//! against in-memory fakes without touching any real backend.

pub mod credential_store;
pub mod login_recorder;
pub mod role_resolver;

pub use credential_store::CredentialStore;
pub use login_recorder::LoginEventRecorder;
pub use role_resolver::RolePermissionResolver;
