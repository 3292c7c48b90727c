use super::{UserQueryService, check_credentials};
use crate::application::{
    dto::{AuthMethod, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::session::session_key,
};

impl UserQueryService {
    pub async fn authenticate_basic(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = check_credentials(
            self.user_repo.as_ref(),
            self.password_hasher.as_ref(),
            username,
            password,
        )
        .await?;

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.into(),
            via: AuthMethod::Basic,
        })
    }

    /// Resolves a session token. Expired sessions are dropped from the store
    /// on first sight.
    pub async fn authenticate_session(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let key = session_key(token);
        let record = self
            .session_store
            .get(&key)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        if record.expires_at <= self.clock.now() {
            self.session_store.remove(&key).await?;
            tracing::debug!(user_id = record.user_id.0, "expired session rejected");
            return Err(ApplicationError::unauthorized("session expired"));
        }

        Ok(AuthenticatedUser {
            id: record.user_id,
            username: record.username,
            via: AuthMethod::Session,
        })
    }
}
