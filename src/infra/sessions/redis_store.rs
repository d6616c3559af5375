//! Redis-backed session store.
//!
//! Each session is stored as JSON under `session:{token}` with a TTL, so Redis
//! expires abandoned sessions on its own.

use async_trait::async_trait;
use chrono::Duration;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use super::SessionStore;
use crate::config::CACHE_PREFIX_SESSION;
use crate::domain::{Session, UserId};
use crate::errors::{AppError, AppResult};

/// Redis session store with connection pooling.
#[derive(Clone)]
pub struct RedisSessionStore {
    connection: ConnectionManager,
    ttl: Duration,
}

impl RedisSessionStore {
    /// Connect to Redis.
    pub async fn connect(redis_url: &str, ttl: Duration) -> AppResult<Self> {
        let client = Client::open(redis_url).map_err(cache_error)?;
        let connection = ConnectionManager::new(client).await.map_err(cache_error)?;

        tracing::info!("Redis session store connected");

        Ok(Self { connection, ttl })
    }

    fn ttl_seconds(&self) -> u64 {
        self.ttl.num_seconds().max(1) as u64
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user_id: UserId) -> AppResult<Session> {
        let session = Session::start(user_id, self.ttl);
        let json = serde_json::to_string(&session)
            .map_err(|e| AppError::session(format!("Session serialization error: {}", e)))?;

        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(session_key(&session.token), json, self.ttl_seconds())
            .await
            .map_err(cache_error)?;

        Ok(session)
    }

    async fn get(&self, token: &str) -> AppResult<Option<Session>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(session_key(token)).await.map_err(cache_error)?;

        let Some(json) = value else {
            return Ok(None);
        };

        match decode_session(&json) {
            Some(session) => Ok(Some(session)),
            None => {
                // unreadable or stale entries are treated as logged out
                let _: () = conn.del(session_key(token)).await.map_err(cache_error)?;
                Ok(None)
            }
        }
    }

    async fn revoke(&self, token: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(session_key(token)).await.map_err(cache_error)?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;
        Ok(())
    }
}

fn session_key(token: &str) -> String {
    format!("{}{}", CACHE_PREFIX_SESSION, token)
}

/// Parse a stored session, yielding `None` for corrupt or expired entries.
fn decode_session(json: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(json) {
        Ok(session) if session.is_expired() => None,
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable session entry: {}", e);
            None
        }
    }
}

fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::session(format!("Redis error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_prefix() {
        assert_eq!(session_key("abc"), "session:abc");
    }

    #[test]
    fn test_decode_live_session() {
        let session = Session::start(5, Duration::hours(1));
        let json = serde_json::to_string(&session).unwrap();

        assert_eq!(decode_session(&json), Some(session));
    }

    #[test]
    fn test_decode_corrupt_session() {
        assert_eq!(decode_session("{not json"), None);
        assert_eq!(decode_session(r#"{"token":"abc"}"#), None);
    }

    #[test]
    fn test_decode_expired_session() {
        let session = Session::start(5, Duration::zero());
        let json = serde_json::to_string(&session).unwrap();

        assert_eq!(decode_session(&json), None);
    }
}
