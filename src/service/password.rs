//! One-way password digests (bcrypt). Work runs on the blocking pool.

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        PasswordHasher { cost }
    }

    /// Salted digest of `plain`.
    pub async fn hash(&self, plain: String) -> Result<String, AppError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| AppError::Hash(e.to_string()))?
            .map_err(|e| AppError::Hash(e.to_string()))
    }

    /// True when `plain` matches `digest`. A digest that does not parse never matches.
    pub async fn verify(&self, plain: String, digest: String) -> Result<bool, AppError> {
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &digest))
            .await
            .map_err(|e| AppError::Hash(e.to_string()))?;
        match outcome {
            Ok(matched) => Ok(matched),
            Err(e) => {
                tracing::warn!(error = %e, "stored password digest is malformed");
                Ok(false)
            }
        }
    }
}
