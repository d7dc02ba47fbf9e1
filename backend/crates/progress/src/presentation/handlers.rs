//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use kernel::error::app_error::{AppError, AppResult};
use kernel::extract::AuthenticatedUser;

use crate::application::config::ProgressConfig;
use crate::application::{
    CompleteModuleUseCase, GetProgressUseCase, GetStatsUseCase, LeaderboardUseCase,
};
use crate::domain::catalog::{self, ModuleDetail, ModuleSummary};
use crate::domain::entities::Progress;
use crate::domain::repository::ProgressRepository;
use crate::domain::services::CompletionInput;
use crate::domain::value_objects::ModuleId;
use crate::error::ProgressResult;
use crate::presentation::dto::{CompletionResponse, LeaderboardEntry, ModuleCompleteRequest};

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProgressConfig>,
}

// ============================================================================
// Progress
// ============================================================================

/// GET /api/progress
pub async fn get_progress<R>(
    State(state): State<ProgressAppState<R>>,
    user: AuthenticatedUser,
) -> ProgressResult<Json<Progress>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProgressUseCase::new(state.repo.clone());
    let progress = use_case.execute(&user.user_id).await?;

    Ok(Json(progress))
}

/// POST /api/progress/module-complete
pub async fn module_complete<R>(
    State(state): State<ProgressAppState<R>>,
    user: AuthenticatedUser,
    Json(req): Json<ModuleCompleteRequest>,
) -> ProgressResult<Json<CompletionResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = CompleteModuleUseCase::new(state.repo.clone(), state.config.clone());

    let input = CompletionInput {
        module_id: req.module_id,
        score: req.score,
        correct_answers: req.correct_answers,
        total_attempts: req.total_attempts,
        time_spent: req.time_spent,
    };

    let output = use_case.execute(&user.user_id, input).await?;

    Ok(Json(CompletionResponse {
        progress: output.progress,
        points_earned: output.points_earned,
        new_badges: output.new_badges,
        completed_achievements: output.completed_achievements,
    }))
}

/// GET /api/progress/stats
pub async fn get_stats<R>(
    State(state): State<ProgressAppState<R>>,
    user: AuthenticatedUser,
) -> ProgressResult<Json<Progress>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetStatsUseCase::new(state.repo.clone(), state.config.clone());
    let progress = use_case.execute(&user.user_id).await?;

    Ok(Json(progress))
}

/// GET /api/progress/leaderboard
pub async fn leaderboard<R>(
    State(state): State<ProgressAppState<R>>,
    _user: AuthenticatedUser,
) -> ProgressResult<Json<Vec<LeaderboardEntry>>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = LeaderboardUseCase::new(state.repo.clone(), state.config.clone());
    let rows = use_case.execute().await?;

    Ok(Json(rows.into_iter().map(LeaderboardEntry::from).collect()))
}

// ============================================================================
// Module Catalog
// ============================================================================

/// GET /api/modules
pub async fn list_modules() -> Json<&'static [ModuleSummary]> {
    Json(catalog::all_modules())
}

/// GET /api/modules/{id}
pub async fn get_module(Path(id): Path<String>) -> AppResult<Json<ModuleDetail>> {
    let module_id: ModuleId = id
        .parse()
        .map_err(|_| AppError::not_found("Module not found"))?;

    Ok(Json(catalog::module_detail(module_id)))
}
