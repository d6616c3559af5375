//! Login session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Server-held proof of a successful login, referenced by an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `user_id` with a fresh random token.
    ///
    /// A lifetime reaching past the last representable instant saturates there.
    pub fn start(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().simple().to_string(),
            user_id,
            created_at: now,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = Session::start(1, Duration::hours(1));
        let b = Session::start(1, Duration::hours(1));
        assert_ne!(a.token, b.token);
        assert_eq!(a.token.len(), 32);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let session = Session::start(1, Duration::seconds(9_000_000_000_000));
        assert_eq!(session.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expiry() {
        let session = Session::start(7, Duration::hours(1));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.expires_at));
        assert!(session.is_expired_at(session.created_at + Duration::hours(2)));
    }
}
