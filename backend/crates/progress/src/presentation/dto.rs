//! Data Transfer Objects
//!
//! The `Progress` aggregate already serializes in its wire form, so
//! responses embed it directly; DTOs here cover the request side and the
//! composite response shapes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Achievement, Badge, Progress};
use crate::domain::repository::LeaderboardRow;
use crate::domain::value_objects::ModuleId;

/// POST /api/progress/module-complete request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCompleteRequest {
    pub module_id: ModuleId,
    pub score: u32,
    pub correct_answers: u32,
    pub total_attempts: u32,
    /// Minutes spent on this run
    pub time_spent: u32,
}

/// POST /api/progress/module-complete response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub progress: Progress,
    pub points_earned: i64,
    pub new_badges: Vec<Badge>,
    pub completed_achievements: Vec<Achievement>,
}

/// GET /api/progress/leaderboard entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub email: String,
    pub points: i64,
    pub level: i64,
    pub badge_count: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            email: row.email,
            points: row.points,
            level: row.level,
            badge_count: row.badge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_complete_request_camel_case() {
        let req: ModuleCompleteRequest = serde_json::from_str(
            r#"{
                "moduleId": "phishing-spotter",
                "score": 95,
                "correctAnswers": 9,
                "totalAttempts": 1,
                "timeSpent": 12
            }"#,
        )
        .unwrap();

        assert_eq!(req.module_id, ModuleId::PhishingSpotter);
        assert_eq!(req.correct_answers, 9);
    }

    #[test]
    fn test_unknown_module_id_fails_deserialization() {
        let result = serde_json::from_str::<ModuleCompleteRequest>(
            r#"{
                "moduleId": "crypto-wallets",
                "score": 95,
                "correctAnswers": 9,
                "totalAttempts": 1,
                "timeSpent": 12
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_leaderboard_entry_camel_case() {
        let entry = LeaderboardEntry::from(LeaderboardRow {
            email: "alice@example.com".into(),
            points: 1500,
            level: 2,
            badge_count: 3,
        });

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""badgeCount":3"#));
        assert!(json.contains(r#""points":1500"#));
    }
}
