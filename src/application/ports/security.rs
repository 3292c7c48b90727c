// src/application/ports/security.rs
use crate::{application::ApplicationResult, domain::user::PasswordHash};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash>;
    /// `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, expected_hash: &PasswordHash) -> ApplicationResult<bool>;
}
