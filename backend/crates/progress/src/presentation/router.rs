//! Progress Routers
//!
//! The progress router expects the auth middleware layered on top (it
//! reads `AuthenticatedUser` from request extensions). The modules router
//! is public and stateless.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ProgressConfig;
use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the Progress router with PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository, config: ProgressConfig) -> Router {
    progress_router_generic(repo, config)
}

/// Create a generic Progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R, config: ProgressConfig) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::get_progress::<R>))
        .route("/module-complete", post(handlers::module_complete::<R>))
        .route("/stats", get(handlers::get_stats::<R>))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .with_state(state)
}

/// Create the public module catalog router
pub fn modules_router() -> Router {
    Router::new()
        .route("/", get(handlers::list_modules))
        .route("/{id}", get(handlers::get_module))
}
