//! In-process session store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::SessionStore;
use crate::domain::{Session, UserId};
use crate::errors::AppResult;

/// Sessions kept in a map for the lifetime of the process.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of stored sessions, expired ones included until purged.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: UserId) -> AppResult<Session> {
        let session = Session::start(user_id, self.ttl);
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        // abandoned sessions are dropped whenever a new one starts
        sessions.retain(|_, existing| !existing.is_expired_at(now));
        sessions.insert(session.token.clone(), session.clone());

        Ok(session)
    }

    async fn get(&self, token: &str) -> AppResult<Option<Session>> {
        let session = self.sessions.read().await.get(token).cloned();

        match session {
            Some(session) if session.is_expired() => {
                self.sessions.write().await.remove(token);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn revoke(&self, token: &str) -> AppResult<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemorySessionStore::new(Duration::hours(1));
        let session = store.create(42).await.unwrap();

        let found = store.get(&session.token).await.unwrap().unwrap();
        assert_eq!(found.user_id, 42);
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let store = MemorySessionStore::new(Duration::hours(1));
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let store = MemorySessionStore::new(Duration::hours(1));
        let session = store.create(1).await.unwrap();

        store.revoke(&session.token).await.unwrap();
        store.revoke(&session.token).await.unwrap();
        assert!(store.get(&session.token).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_removed() {
        let store = MemorySessionStore::new(Duration::zero());
        let session = store.create(1).await.unwrap();

        assert!(store.get(&session.token).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_drops_expired_sessions() {
        let store = MemorySessionStore::new(Duration::zero());
        store.create(1).await.unwrap();
        store.create(2).await.unwrap();

        // each create purges the already-expired predecessor
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = MemorySessionStore::new(Duration::hours(1));
        let first = store.create(1).await.unwrap();
        let second = store.create(1).await.unwrap();

        store.revoke(&first.token).await.unwrap();
        assert!(store.get(&second.token).await.unwrap().is_some());
    }
}
