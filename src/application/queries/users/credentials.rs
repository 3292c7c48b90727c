use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::security::PasswordHasher,
    },
    domain::user::{User, UserRepository, Username},
};

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Resolves an active user by username and password. Every failure mode
/// yields the same error so callers cannot probe which part was wrong.
pub(crate) async fn check_credentials(
    user_repo: &dyn UserRepository,
    password_hasher: &dyn PasswordHasher,
    username: &str,
    password: &str,
) -> ApplicationResult<User> {
    let username =
        Username::new(username).map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

    let user = user_repo
        .find_by_username(&username)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

    if password_hasher.verify(password, &user.password_hash).await? {
        Ok(user)
    } else {
        Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
    }
}
