use super::UserCommandService;
use crate::application::{
    dto::SessionDto,
    error::{ApplicationError, ApplicationResult},
    ports::session::{SessionRecord, session_key},
    queries::users::check_credentials,
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<SessionDto> {
        let user = check_credentials(
            self.user_repo.as_ref(),
            self.password_hasher.as_ref(),
            &command.username,
            &command.password,
        )
        .await?;

        let ttl = chrono::Duration::from_std(self.session_ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let now = self.clock.now();
        let expires_at = now + ttl;

        let purged = self.session_store.purge_expired(now).await?;
        if purged > 0 {
            tracing::debug!(purged, "expired sessions purged");
        }

        let token = self.token_generator.generate();
        let record = SessionRecord {
            user_id: user.id,
            username: user.username.to_string(),
            expires_at,
        };
        self.session_store.insert(&session_key(&token), record).await?;

        tracing::info!(user_id = user.id.0, "session opened");
        Ok(SessionDto {
            token,
            username: user.username.into(),
            expires_at,
        })
    }
}
