//! Achievement Rules
//!
//! Fixed achievement set, fully re-evaluated on every update. Completion
//! is sticky: the merge step never un-completes or re-stamps an
//! achievement, so a later drop in the underlying metric (e.g. a broken
//! login streak) leaves earned achievements intact.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Achievement, Progress};
use crate::domain::value_objects::ModuleId;

/// Current standing of one achievement, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementEval {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub progress: u32,
    pub completed: bool,
}

/// Evaluate all achievements against the current aggregate.
pub fn evaluate_achievements(progress: &Progress) -> Vec<AchievementEval> {
    let completed_count = progress.completed_modules.len() as u32;

    let high_scores = progress
        .module_progress
        .values()
        .filter(|m| m.score >= 80)
        .count() as u32;

    // Every module in the catalog needs an attempt scoring at least 80;
    // a module never attempted does not qualify.
    let all_modules_high = ModuleId::ALL.iter().all(|m| {
        progress
            .module_progress
            .get(m)
            .is_some_and(|attempt| attempt.score >= 80)
    });

    let any_perfect = progress.module_progress.values().any(|m| m.score == 100);

    vec![
        AchievementEval {
            id: "security-novice",
            name: "Security Novice",
            description: "Complete your first module",
            progress: completed_count,
            completed: completed_count >= 1,
        },
        AchievementEval {
            id: "security-expert",
            name: "Security Expert",
            description: "Complete all modules with a score of 80% or higher",
            progress: high_scores,
            completed: all_modules_high,
        },
        AchievementEval {
            id: "perfect-defender",
            name: "Perfect Defender",
            description: "Achieve 100% score in any module",
            progress: u32::from(any_perfect),
            completed: any_perfect,
        },
        AchievementEval {
            id: "consistent-learner",
            name: "Consistent Learner",
            description: "Maintain a 7-day login streak",
            progress: progress.stats.login_streak,
            completed: progress.stats.login_streak >= 7,
        },
    ]
}

/// Upsert evaluated achievements into the stored list.
///
/// Progress values always refresh; `completed` only ever flips to true,
/// and `earned_at` is stamped exactly once, on first completion. Returns
/// the achievements that are completed after the merge.
pub fn merge_achievements(
    achievements: &mut Vec<Achievement>,
    evaluated: Vec<AchievementEval>,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    for eval in evaluated {
        match achievements.iter_mut().find(|a| a.id == eval.id) {
            Some(existing) => {
                existing.progress = eval.progress;
                existing.completed = existing.completed || eval.completed;
                if existing.completed && existing.earned_at.is_none() {
                    existing.earned_at = Some(now);
                }
            }
            None => {
                achievements.push(Achievement {
                    id: eval.id.to_string(),
                    name: eval.name.to_string(),
                    description: eval.description.to_string(),
                    progress: eval.progress,
                    completed: eval.completed,
                    earned_at: eval.completed.then_some(now),
                });
            }
        }
    }

    achievements
        .iter()
        .filter(|a| a.completed)
        .cloned()
        .collect()
}
