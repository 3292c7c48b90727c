// src/application/commands/users/service.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::ports::{
        security::PasswordHasher, session::SessionStore, time::Clock, util::TokenGenerator,
    },
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) token_generator: Arc<dyn TokenGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) session_ttl: Duration,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        token_generator: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_store,
            token_generator,
            clock,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }
}
