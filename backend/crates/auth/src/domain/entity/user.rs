//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.
//! The password hash lives in the separate Credential entity.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email (unique, canonical lowercase form)
    pub email: Email,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_login() {
        let user = User::new(Email::new("alice@example.com").unwrap());
        assert!(user.last_login_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_record_login_stamps_both_timestamps() {
        let mut user = User::new(Email::new("alice@example.com").unwrap());
        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }
}
