//! Application Configuration
//!
//! Configuration for the Progress application layer.

/// Progress application configuration
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Leaderboard size
    pub leaderboard_limit: i64,
    /// Attempts per update before surfacing a version conflict
    pub max_store_attempts: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            leaderboard_limit: 10,
            max_store_attempts: 3,
        }
    }
}
