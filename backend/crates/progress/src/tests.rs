//! Crate-level tests for the progress module
//!
//! Use-case tests run against an in-memory repository; pure rule tests
//! live next to the domain code.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use kernel::id::UserId;

use crate::application::config::ProgressConfig;
use crate::application::{CompleteModuleUseCase, GetStatsUseCase, LeaderboardUseCase};
use crate::domain::entities::Progress;
use crate::domain::repository::{
    LeaderboardRow, ProgressRepository, VersionedProgress,
};
use crate::domain::services::CompletionInput;
use crate::domain::value_objects::ModuleId;
use crate::error::{ProgressError, ProgressResult};

/// In-memory repository with the same CAS semantics as the Postgres one.
#[derive(Clone, Default)]
struct MemRepo {
    records: Arc<Mutex<HashMap<uuid::Uuid, (Progress, i64)>>>,
    known_users: Arc<Mutex<Vec<uuid::Uuid>>>,
    /// Number of store calls to fail with Conflict before succeeding
    conflicts_left: Arc<AtomicU32>,
}

impl MemRepo {
    fn with_user(user_id: &UserId) -> Self {
        let repo = Self::default();
        repo.known_users.lock().unwrap().push(*user_id.as_uuid());
        repo
    }

    fn failing_stores(self, n: u32) -> Self {
        self.conflicts_left.store(n, Ordering::SeqCst);
        self
    }
}

impl ProgressRepository for MemRepo {
    async fn load(&self, user_id: &UserId) -> ProgressResult<Option<VersionedProgress>> {
        if !self.known_users.lock().unwrap().contains(user_id.as_uuid()) {
            return Err(ProgressError::UserNotFound);
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .get(user_id.as_uuid())
            .map(|(p, v)| VersionedProgress {
                progress: p.clone(),
                version: *v,
            }))
    }

    async fn load_or_init(&self, user_id: &UserId) -> ProgressResult<VersionedProgress> {
        if !self.known_users.lock().unwrap().contains(user_id.as_uuid()) {
            return Err(ProgressError::UserNotFound);
        }

        let mut records = self.records.lock().unwrap();
        let (progress, version) = records
            .entry(*user_id.as_uuid())
            .or_insert_with(|| (Progress::default(), 0));

        Ok(VersionedProgress {
            progress: progress.clone(),
            version: *version,
        })
    }

    async fn store(
        &self,
        user_id: &UserId,
        progress: &Progress,
        expected_version: i64,
    ) -> ProgressResult<()> {
        if self
            .conflicts_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ProgressError::Conflict);
        }

        let mut records = self.records.lock().unwrap();
        match records.get_mut(user_id.as_uuid()) {
            Some((stored, version)) if *version == expected_version => {
                *stored = progress.clone();
                *version += 1;
                Ok(())
            }
            _ => Err(ProgressError::Conflict),
        }
    }

    async fn leaderboard(&self, limit: i64) -> ProgressResult<Vec<LeaderboardRow>> {
        let records = self.records.lock().unwrap();
        let mut rows: Vec<LeaderboardRow> = records
            .values()
            .map(|(p, _)| LeaderboardRow {
                email: "learner@example.com".to_string(),
                points: p.points,
                level: p.level,
                badge_count: p.badge_count() as i64,
            })
            .collect();

        rows.sort_by(|a, b| b.points.cmp(&a.points));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

// 1000 base + 50 accuracy + 25 first-try = 1075
fn perfect_phishing_run() -> CompletionInput {
    CompletionInput {
        module_id: ModuleId::PhishingSpotter,
        score: 100,
        correct_answers: 1,
        total_attempts: 1,
        time_spent: 12,
    }
}

#[tokio::test]
async fn complete_module_full_scenario() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id));
    let use_case = CompleteModuleUseCase::new(repo.clone(), Arc::new(ProgressConfig::default()));

    let output = use_case
        .execute(&user_id, perfect_phishing_run())
        .await
        .unwrap();

    assert_eq!(output.points_earned, 1075);
    assert_eq!(output.progress.points, 1075);
    assert_eq!(output.progress.level, 2);
    assert!(output.new_badges.iter().any(|b| b.id == "phishing-expert"));
    assert!(
        output
            .completed_achievements
            .iter()
            .any(|a| a.id == "perfect-defender")
    );

    // Version advanced exactly once
    let stored = repo.load(&user_id).await.unwrap().unwrap();
    assert_eq!(stored.version, 1);
}

#[tokio::test]
async fn complete_module_unknown_user() {
    let repo = Arc::new(MemRepo::default());
    let use_case = CompleteModuleUseCase::new(repo, Arc::new(ProgressConfig::default()));

    let result = use_case.execute(&UserId::new(), perfect_phishing_run()).await;
    assert!(matches!(result, Err(ProgressError::UserNotFound)));
}

#[tokio::test]
async fn complete_module_retries_version_races() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id).failing_stores(2));
    let use_case = CompleteModuleUseCase::new(repo, Arc::new(ProgressConfig::default()));

    // Two injected conflicts, three allowed attempts: succeeds
    let output = use_case
        .execute(&user_id, perfect_phishing_run())
        .await
        .unwrap();
    assert_eq!(output.points_earned, 1075);
}

#[tokio::test]
async fn complete_module_surfaces_conflict_after_exhaustion() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id).failing_stores(3));
    let use_case = CompleteModuleUseCase::new(repo, Arc::new(ProgressConfig::default()));

    let result = use_case.execute(&user_id, perfect_phishing_run()).await;
    assert!(matches!(result, Err(ProgressError::Conflict)));
}

#[tokio::test]
async fn complete_module_rejects_invalid_input() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id));
    let use_case = CompleteModuleUseCase::new(repo, Arc::new(ProgressConfig::default()));

    let mut input = perfect_phishing_run();
    input.total_attempts = 0;

    let result = use_case.execute(&user_id, input).await;
    assert!(matches!(result, Err(ProgressError::InvalidInput(_))));
}

#[tokio::test]
async fn stats_rolls_streak_once_per_day() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id));
    let use_case = GetStatsUseCase::new(repo.clone(), Arc::new(ProgressConfig::default()));

    let first = use_case.execute(&user_id).await.unwrap();
    assert_eq!(first.stats.login_streak, 1);
    assert!(first.stats.last_login_date.is_some());

    let version_after_first = repo.load(&user_id).await.unwrap().unwrap().version;

    // Second fetch the same day: no change, nothing persisted
    let second = use_case.execute(&user_id).await.unwrap();
    assert_eq!(second.stats.login_streak, 1);
    assert_eq!(second.stats.last_login_date, first.stats.last_login_date);

    let stored = repo.load(&user_id).await.unwrap().unwrap();
    assert_eq!(stored.version, version_after_first);
    // The response mirrors storage exactly
    assert_eq!(stored.progress.stats.last_login_date, second.stats.last_login_date);
}

#[tokio::test]
async fn stats_initializes_zero_progress() {
    let user_id = UserId::new();
    let repo = Arc::new(MemRepo::with_user(&user_id));
    let use_case = GetStatsUseCase::new(repo, Arc::new(ProgressConfig::default()));

    let progress = use_case.execute(&user_id).await.unwrap();
    assert_eq!(progress.points, 0);
    assert_eq!(progress.level, 1);
    assert!(progress.completed_modules.is_empty());
}

#[tokio::test]
async fn leaderboard_orders_by_points_descending() {
    let repo = Arc::new(MemRepo::default());

    for points in [500i64, 1500, 300] {
        let user_id = UserId::new();
        repo.known_users.lock().unwrap().push(*user_id.as_uuid());
        let mut progress = Progress::default();
        progress.points = points;
        progress.level = crate::domain::services::level_for_points(points);
        repo.records
            .lock()
            .unwrap()
            .insert(*user_id.as_uuid(), (progress, 0));
    }

    let use_case = LeaderboardUseCase::new(repo, Arc::new(ProgressConfig::default()));
    let rows = use_case.execute().await.unwrap();

    let points: Vec<i64> = rows.iter().map(|r| r.points).collect();
    assert_eq!(points, vec![1500, 500, 300]);
    assert_eq!(rows[0].level, 2);
}
