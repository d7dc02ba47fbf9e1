//! Get Stats Use Case
//!
//! Fetches progress for the stats view and rolls the daily login streak.
//! The client hits this endpoint right after signing in, so the streak is
//! maintained here; the update is idempotent within a UTC day. A changed
//! streak re-merges achievements so `consistent-learner` can complete
//! without a module submission.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;

use crate::application::config::ProgressConfig;
use crate::domain::achievements::{evaluate_achievements, merge_achievements};
use crate::domain::entities::Progress;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

/// Get stats use case
pub struct GetStatsUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R> GetStatsUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user_id: &UserId) -> ProgressResult<Progress> {
        let mut attempts = 0u32;

        loop {
            attempts += 1;

            let versioned = self.repo.load_or_init(user_id).await?;
            let mut progress = versioned.progress;

            let now = Utc::now();
            if !progress.stats.record_daily_login(now) {
                // Already rolled today; nothing to persist
                return Ok(progress);
            }

            let evaluated = evaluate_achievements(&progress);
            merge_achievements(&mut progress.achievements, evaluated, now);

            match self
                .repo
                .store(user_id, &progress, versioned.version)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        user_id = %user_id,
                        login_streak = progress.stats.login_streak,
                        "Login streak rolled"
                    );
                    return Ok(progress);
                }
                Err(ProgressError::Conflict) if attempts < self.config.max_store_attempts => {
                    tracing::debug!(
                        user_id = %user_id,
                        attempt = attempts,
                        "Streak update version race, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
