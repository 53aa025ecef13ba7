//! Argon2id password hashing.
//!
//! Hashing is CPU- and memory-bound, so every call runs on tokio's blocking
//! pool instead of stalling the async workers.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use tokio::sync::OnceCell;

use crate::config::PasswordParams;
use crate::error::AuthError;

/// Hashes and verifies passwords with a fixed cost.
#[derive(Debug, Clone)]
pub struct PasswordService {
    params: PasswordParams,
    /// Hash verified against when the account does not exist, so that an
    /// unknown email costs as much as a wrong password.
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordService {
    pub fn new(params: PasswordParams) -> Self {
        Self {
            params,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Hashes a password into a PHC string.
    pub async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let params = self.params;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(params, &password))
            .await
            .map_err(|e| AuthError::Password(e.to_string()))?
    }

    /// Checks a password against a stored PHC string.
    ///
    /// A malformed stored hash verifies as `false`.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
            .await
            .map_err(|e| AuthError::Password(e.to_string()))
    }

    /// Burns the same work as [`verify`](Self::verify) and always fails.
    pub async fn verify_dummy(&self, password: &str) -> Result<bool, AuthError> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash("logistix-dummy-password"))
            .await?;
        self.verify(password, hash).await?;
        Ok(false)
    }
}

fn hash_blocking(params: PasswordParams, password: &str) -> Result<String, AuthError> {
    let params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        None,
    )
    .map_err(|e| AuthError::Password(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Password(e.to_string()))
}

fn verify_blocking(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        // Cost parameters are read back from the PHC string.
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}
