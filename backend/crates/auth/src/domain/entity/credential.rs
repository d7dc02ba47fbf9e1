//! Credential Entity
//!
//! Sensitive authentication data, kept separate from the User profile.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// Password credential for a user
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    /// Argon2id hash in PHC string form
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: UserId, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
