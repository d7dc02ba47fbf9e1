//! Progress (Gamification) Backend Module
//!
//! Tracks each learner's journey through the security training modules:
//! scoring, leveling, badges, achievements, stats, and the leaderboard.
//!
//! Clean Architecture structure:
//! - `domain/` - Pure gamification rules, entities, repository traits
//! - `application/` - Use cases (module completion, stats, leaderboard)
//! - `infra/` - PostgreSQL implementation (JSONB record + version CAS)
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Concurrency Model
//! Each user's progress is one versioned record. Updates are read-modify-
//! write with compare-and-swap on the version column; the orchestrator
//! retries a bounded number of times on contention. Different users never
//! contend.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ProgressConfig;
pub use error::{ProgressError, ProgressResult};
pub use infra::postgres::PgProgressRepository;
pub use presentation::router::{modules_router, progress_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
