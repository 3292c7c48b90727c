use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{PasswordHash, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// Replaces the stored hash and reactivates the account.
    async fn reset_password(
        &self,
        username: &Username,
        password_hash: PasswordHash,
    ) -> DomainResult<User>;
}
