use super::UserCommandService;
use crate::application::{ApplicationResult, ports::session::session_key};

pub struct LogoutCommand {
    pub token: Option<String>,
}

impl UserCommandService {
    /// Closes the session named by the token. Logging out without a session,
    /// or with one that already ended, is not an error.
    pub async fn logout(&self, command: LogoutCommand) -> ApplicationResult<()> {
        let Some(token) = command.token else {
            return Ok(());
        };

        if self.session_store.remove(&session_key(&token)).await? {
            tracing::info!("session closed");
        }
        Ok(())
    }
}
