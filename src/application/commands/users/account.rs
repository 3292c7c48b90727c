use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{NewUser, Username},
};

/// Creates the account, or resets its password when it already exists.
pub struct EnsureAccountCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn ensure_account(
        &self,
        command: EnsureAccountCommand,
    ) -> ApplicationResult<()> {
        let username = Username::new(command.username)?;
        let password_hash = self.password_hasher.hash(&command.password).await?;

        match self.user_repo.find_by_username(&username).await? {
            Some(_) => {
                let user = self.user_repo.reset_password(&username, password_hash).await?;
                tracing::info!(user_id = user.id.0, "account password reset");
            }
            None => {
                let new_user = NewUser::new(username, password_hash, self.clock.now());
                let user = self.user_repo.insert(new_user).await?;
                tracing::info!(user_id = user.id.0, "account created");
            }
        }

        Ok(())
    }
}
