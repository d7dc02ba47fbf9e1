//! Session Entity
//!
//! Server-side session record. The client only ever holds the signed token;
//! the database stores the session id and lifetime.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

/// Authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Absolute expiry in unix milliseconds
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Open a new session valid for `ttl`.
    pub fn open(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_seen_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    /// Record activity on this session
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_session_is_not_expired() {
        let session = Session::open(UserId::new(), Duration::hours(12));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_zero_ttl_session_is_expired() {
        let session = Session::open(UserId::new(), Duration::zero());
        assert!(session.is_expired());
    }

    #[test]
    fn test_touch_advances_last_seen() {
        let mut session = Session::open(UserId::new(), Duration::hours(1));
        let before = session.last_seen_at;
        session.touch();
        assert!(session.last_seen_at >= before);
    }
}
