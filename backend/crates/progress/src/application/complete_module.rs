//! Complete Module Use Case
//!
//! The single write path for progress. Loads the versioned record,
//! applies the pure completion transition, and stores with compare-and-
//! swap. A lost version race reloads and reapplies, bounded by
//! `max_store_attempts`; exhaustion surfaces `Conflict`.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;

use crate::application::config::ProgressConfig;
use crate::domain::entities::{Achievement, Badge, Progress};
use crate::domain::repository::ProgressRepository;
use crate::domain::services::{CompletionInput, apply_completion};
use crate::error::{ProgressError, ProgressResult};

/// Completion output
pub struct CompletionOutput {
    pub progress: Progress,
    pub points_earned: i64,
    pub new_badges: Vec<Badge>,
    pub completed_achievements: Vec<Achievement>,
}

/// Complete module use case
pub struct CompleteModuleUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R> CompleteModuleUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: CompletionInput,
    ) -> ProgressResult<CompletionOutput> {
        let mut attempts = 0u32;

        loop {
            attempts += 1;

            let versioned = self.repo.load_or_init(user_id).await?;

            let mut progress = versioned.progress;
            let now = Utc::now();
            let delta = apply_completion(&mut progress, &input, now)?;

            match self
                .repo
                .store(user_id, &progress, versioned.version)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        user_id = %user_id,
                        module = %input.module_id,
                        points_earned = delta.points_earned,
                        new_badges = delta.new_badges.len(),
                        "Module completion recorded"
                    );

                    return Ok(CompletionOutput {
                        progress,
                        points_earned: delta.points_earned,
                        new_badges: delta.new_badges,
                        completed_achievements: delta.completed_achievements,
                    });
                }
                Err(ProgressError::Conflict) if attempts < self.config.max_store_attempts => {
                    tracing::debug!(
                        user_id = %user_id,
                        attempt = attempts,
                        "Progress version race, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
