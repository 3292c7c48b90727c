// tests/support/mocks/security.rs
use article_api::application::{ApplicationResult, ports::security::PasswordHasher};
use article_api::domain::user::PasswordHash;
use async_trait::async_trait;

/// Reversible "hash" so tests stay fast; never use outside tests.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash> {
        Ok(PasswordHash::new(format!("plain${password}"))?)
    }

    async fn verify(&self, password: &str, expected_hash: &PasswordHash) -> ApplicationResult<bool> {
        Ok(expected_hash.as_str() == format!("plain${password}"))
    }
}
