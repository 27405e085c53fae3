//! # reporthub-auth
//!
//! Credential authentication and authorization-claim assembly for ReportHub.
//!
//! ## Modules
//!
//! - `password` — PBKDF2-HMAC-SHA256 credential hashing and verification
//! - `authn` — login state machine, registration, and the outcome union
//! - `jwt` — access token claims, issuance, and validation
//! - `gateway` — capability traits for the credential store, role/permission
//!   resolver, and login event recorder
//! - `client` — source IP and User-Agent metadata derivation

pub mod authn;
pub mod client;
pub mod gateway;
pub mod jwt;
pub mod password;

pub use authn::{AuthOutcome, Authenticator, LoginRequest, RegisterOutcome, RegisterRequest};
pub use client::ClientInfo;
pub use gateway::{CredentialStore, LoginEventRecorder, RolePermissionResolver};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
