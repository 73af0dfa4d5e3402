//! Password hashing
//!
//! Argon2 with a random per-password salt. The PHC output string embeds the
//! algorithm, parameters and salt, so verification needs nothing else.

use anyhow::{Result, anyhow};
use argon2::{Argon2, password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString}};
use argon2::password_hash::rand_core::OsRng;

#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password into a self-describing digest
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored digest.
    /// A digest that cannot be parsed never matches.
    pub fn verify(&self, digest: &str, password: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self.argon2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(e) => {
                tracing::warn!("Stored password digest is malformed: {}", e);
                false
            }
        }
    }

    /// `hash` on the blocking pool; Argon2 is deliberately slow
    pub async fn hash_blocking(&self, password: String) -> Result<String> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash(&password)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(&self, digest: String, password: String) -> bool {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.verify(&digest, &password))
            .await
            .unwrap_or(false)
    }
}
