use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::session::{SessionRecord, SessionStore},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local session store. Sessions do not survive a restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, SessionRecord>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, key: &str, record: SessionRecord) -> ApplicationResult<()> {
        self.lock()?.insert(key.to_string(), record);
        Ok(())
    }

    async fn get(&self, key: &str) -> ApplicationResult<Option<SessionRecord>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> ApplicationResult<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> ApplicationResult<usize> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at > now);
        Ok(before - sessions.len())
    }
}

pub fn into_arc(store: InMemorySessionStore) -> Arc<dyn SessionStore> {
    Arc::new(store)
}
