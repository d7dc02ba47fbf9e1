//! Get Progress Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Progress;
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;

/// Get progress use case
pub struct GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the user's progress, initializing the zero record on first
    /// access.
    pub async fn execute(&self, user_id: &UserId) -> ProgressResult<Progress> {
        let versioned = self.repo.load_or_init(user_id).await?;
        Ok(versioned.progress)
    }
}
