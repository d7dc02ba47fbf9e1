//! Repository Traits
//!
//! Interfaces for progress persistence. Implementation is in the
//! infrastructure layer.

use kernel::id::UserId;

use crate::domain::entities::Progress;
use crate::error::ProgressResult;

/// A progress record together with its CAS version.
#[derive(Debug, Clone)]
pub struct VersionedProgress {
    pub progress: Progress,
    pub version: i64,
}

/// Leaderboard row, already ordered by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub email: String,
    pub points: i64,
    pub level: i64,
    pub badge_count: i64,
}

/// Progress repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Load the versioned progress record for a user.
    ///
    /// `Ok(None)` means no record yet; `UserNotFound` means the user
    /// itself does not exist.
    async fn load(&self, user_id: &UserId) -> ProgressResult<Option<VersionedProgress>>;

    /// Create the zero record if missing, then return the current record.
    ///
    /// Race-safe: concurrent callers converge on one record. Errors with
    /// `UserNotFound` when the user does not exist.
    async fn load_or_init(&self, user_id: &UserId) -> ProgressResult<VersionedProgress>;

    /// Store `progress` if the stored version still equals
    /// `expected_version`; errors with `Conflict` otherwise.
    async fn store(
        &self,
        user_id: &UserId,
        progress: &Progress,
        expected_version: i64,
    ) -> ProgressResult<()>;

    /// Top `limit` learners by points (descending), ties broken by user
    /// creation time (oldest first).
    async fn leaderboard(&self, limit: i64) -> ProgressResult<Vec<LeaderboardRow>>;
}
