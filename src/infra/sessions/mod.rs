//! Session stores.
//!
//! Sessions are server-held; the client only ever sees the opaque token.
//! Two backends exist: an in-process map (default) and Redis, selected by
//! whether `REDIS_URL` is configured.

mod memory;
mod redis_store;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Session, UserId};
use crate::errors::{AppError, AppResult};

pub use self::memory::MemorySessionStore;
pub use self::redis_store::RedisSessionStore;

/// Session store trait for dependency injection.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a new session for the given user.
    async fn create(&self, user_id: UserId) -> AppResult<Session>;

    /// Look up a live session. Unknown and expired tokens yield `None`.
    async fn get(&self, token: &str) -> AppResult<Option<Session>>;

    /// Invalidate a session. Revoking an unknown token is not an error.
    async fn revoke(&self, token: &str) -> AppResult<()>;

    /// Check backend connectivity.
    async fn ping(&self) -> AppResult<()>;
}

/// Build the session store selected by configuration.
pub async fn connect(config: &Config) -> AppResult<Arc<dyn SessionStore>> {
    let ttl = i64::try_from(config.session_ttl_seconds())
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .ok_or_else(|| AppError::session("Session lifetime out of range"))?;

    match &config.redis_url {
        Some(url) => {
            let store = RedisSessionStore::connect(url, ttl).await?;
            tracing::info!("Using Redis session store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("Using in-memory session store");
            Ok(Arc::new(MemorySessionStore::new(ttl)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_oversized_ttl_still_issues_sessions() {
        let config = Config {
            session_ttl_hours: 3_000_000_000,
            ..Config::default()
        };
        let store = connect(&config).await.unwrap();

        let session = store.create(1).await.unwrap();
        assert!(session.expires_at > session.created_at);
        assert!(store.get(&session.token).await.unwrap().is_some());
    }
}
