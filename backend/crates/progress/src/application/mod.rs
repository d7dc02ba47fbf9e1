//! Application Layer - Use Cases

pub mod complete_module;
pub mod config;
pub mod get_progress;
pub mod get_stats;
pub mod leaderboard;

pub use complete_module::{CompleteModuleUseCase, CompletionOutput};
pub use get_progress::GetProgressUseCase;
pub use get_stats::GetStatsUseCase;
pub use leaderboard::LeaderboardUseCase;
