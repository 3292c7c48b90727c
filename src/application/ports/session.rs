use crate::{application::ApplicationResult, domain::user::UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_id: UserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Server-side session storage. Keys are digests of the session token, never
/// the token itself.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, key: &str, record: SessionRecord) -> ApplicationResult<()>;

    async fn get(&self, key: &str) -> ApplicationResult<Option<SessionRecord>>;

    /// Returns true if a session was removed.
    async fn remove(&self, key: &str) -> ApplicationResult<bool>;

    /// Drops every session that expired at or before `now`; returns how many.
    async fn purge_expired(&self, now: DateTime<Utc>) -> ApplicationResult<usize>;
}

/// Store key for a session token.
pub fn session_key(token: &str) -> String {
    blake3::hash(token.as_bytes()).to_hex().to_string()
}
