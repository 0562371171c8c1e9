use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use thiserror::Error;

use crate::domain::Password;

#[derive(Error, Debug)]
pub enum HashingError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Argon2id hashing, run on the blocking pool so request handlers are not
/// stalled by the key derivation.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl Argon2Hasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub async fn hash(&self, password: &Password) -> Result<String, HashingError> {
        let password = password.as_ref().to_owned();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashingError::Hash(e.to_string()))
        })
        .await?
    }

    /// `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
    pub async fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool, HashingError> {
        let plaintext = plaintext.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed_hash =
                PasswordHash::new(&stored_hash).map_err(|e| HashingError::Hash(e.to_string()))?;
            // Parameters come from the PHC string itself.
            Ok(Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed_hash)
                .is_ok())
        })
        .await?
    }
}
