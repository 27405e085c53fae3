//! PBKDF2-HMAC-SHA256 password hashing and verification.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use reporthub_core::config::auth::AuthConfig;
use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;

/// Salt length in bytes.
const SALT_LEN: usize = 16;

/// Derives and verifies password hashes using PBKDF2-HMAC-SHA256.
///
/// The iteration count and output length come from configuration and must
/// match between derivation and verification. Hash and salt are stored as
/// separate standard-base64 strings.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// PBKDF2 iteration count.
    iterations: u32,
    /// Derived hash length in bytes.
    hash_length: usize,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            iterations: config.hash_iterations,
            hash_length: config.hash_length,
        }
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Returns `(hash, salt)`, both base64-encoded. Consumes entropy from
    /// the operating system RNG and has no other side effects.
    pub fn derive(&self, password: &str) -> (String, String) {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        let mut hash = vec![0u8; self.hash_length];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, self.iterations, &mut hash);

        (BASE64.encode(&hash), BASE64.encode(salt))
    }

    /// Verifies a plaintext password against a stored hash and salt.
    ///
    /// Returns `false` for a non-matching password *and* for stored values
    /// that are not valid base64, so callers cannot distinguish the two.
    /// Never panics.
    pub fn verify(&self, password: &str, stored_hash: &str, stored_salt: &str) -> bool {
        self.try_verify(password, stored_hash, stored_salt)
            .unwrap_or(false)
    }

    /// Verifies a plaintext password, surfacing decoding faults.
    ///
    /// A stored hash or salt that is not valid base64 yields a
    /// `Corruption` error so the caller can report the data integrity
    /// problem; a decodable but non-matching hash yields `Ok(false)`.
    pub fn try_verify(
        &self,
        password: &str,
        stored_hash: &str,
        stored_salt: &str,
    ) -> AppResult<bool> {
        let salt = BASE64.decode(stored_salt).map_err(|e| {
            AppError::with_source(
                ErrorKind::Corruption,
                "Stored password salt is not valid base64",
                e,
            )
        })?;
        let stored = BASE64.decode(stored_hash).map_err(|e| {
            AppError::with_source(
                ErrorKind::Corruption,
                "Stored password hash is not valid base64",
                e,
            )
        })?;

        let mut derived = vec![0u8; self.hash_length];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, self.iterations, &mut derived);

        Ok(constant_time_eq(&derived, &stored))
    }
}

/// Compares two byte slices without short-circuiting on the first mismatch.
///
/// Timing is constant over the shared length regardless of where a
/// mismatch occurs. Slices of different lengths never match.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
