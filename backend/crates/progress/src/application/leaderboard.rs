//! Leaderboard Use Case

use std::sync::Arc;

use crate::application::config::ProgressConfig;
use crate::domain::repository::{LeaderboardRow, ProgressRepository};
use crate::error::ProgressResult;

/// Leaderboard use case
pub struct LeaderboardUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R> LeaderboardUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repo, config }
    }

    /// Top learners by points; ordering is done by the store (points
    /// descending, ties broken by user creation time).
    pub async fn execute(&self) -> ProgressResult<Vec<LeaderboardRow>> {
        self.repo.leaderboard(self.config.leaderboard_limit).await
    }
}
