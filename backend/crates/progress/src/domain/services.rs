//! Domain Services
//!
//! Pure gamification logic: scoring, leveling, and the completion
//! transition applied to a `Progress` aggregate. No I/O here; the
//! application layer drives persistence around these functions.

use chrono::{DateTime, Utc};

use crate::domain::achievements::{evaluate_achievements, merge_achievements};
use crate::domain::badges::{evaluate_badges, merge_badges};
use crate::domain::entities::{Achievement, Badge, ModuleAttempt, Progress};
use crate::domain::value_objects::ModuleId;
use crate::error::{ProgressError, ProgressResult};

/// Validated input for one module completion.
#[derive(Debug, Clone)]
pub struct CompletionInput {
    pub module_id: ModuleId,
    pub score: u32,
    pub correct_answers: u32,
    pub total_attempts: u32,
    /// Minutes spent on this run
    pub time_spent: u32,
}

/// What one completion changed, beyond the aggregate itself.
#[derive(Debug, Clone)]
pub struct CompletionDelta {
    pub points_earned: i64,
    pub new_badges: Vec<Badge>,
    pub completed_achievements: Vec<Achievement>,
}

/// Points for one completion:
/// `round(score * 10 + accuracy * 50 + first-try bonus 25)`.
///
/// Rounding is `f64::round` (half away from zero). Deterministic and
/// non-negative for all valid inputs. The accuracy ratio
/// `correct_answers / total_attempts` is not clamped, so a ratio above 1
/// raises the award past the nominal 50-point accuracy cap.
pub fn calculate_points(score: u32, correct_answers: u32, total_attempts: u32) -> ProgressResult<i64> {
    if total_attempts < 1 {
        return Err(ProgressError::InvalidInput(
            "totalAttempts must be at least 1".to_string(),
        ));
    }

    if score > 100 {
        return Err(ProgressError::InvalidInput(
            "score must be between 0 and 100".to_string(),
        ));
    }

    let base = f64::from(score) * 10.0;
    let accuracy_bonus = (f64::from(correct_answers) / f64::from(total_attempts)) * 50.0;
    let speed_bonus = if total_attempts == 1 { 25.0 } else { 0.0 };

    Ok((base + accuracy_bonus + speed_bonus).round() as i64)
}

/// Level for a points total: 1000 points per level, starting at 1.
///
/// Total and monotonic; negative totals clamp to level 1.
pub fn level_for_points(points: i64) -> i64 {
    points.max(0) / 1000 + 1
}

/// Apply one module completion to the aggregate.
///
/// Overwrites the module's attempt, marks the module completed, adds
/// points and time, bumps the module's stat counter, recomputes the
/// level, then re-evaluates badges and achievements.
pub fn apply_completion(
    progress: &mut Progress,
    input: &CompletionInput,
    now: DateTime<Utc>,
) -> ProgressResult<CompletionDelta> {
    let points_earned = calculate_points(input.score, input.correct_answers, input.total_attempts)?;

    progress.module_progress.insert(
        input.module_id,
        ModuleAttempt {
            score: input.score,
            correct_answers: input.correct_answers,
            total_attempts: input.total_attempts,
            last_attempt_date: now,
        },
    );

    progress.completed_modules.insert(input.module_id);

    progress.points += points_earned;
    progress.stats.total_time_spent += input.time_spent;

    match input.module_id {
        ModuleId::PhishingSpotter => {
            progress.stats.phishing_emails_identified += input.correct_answers;
        }
        ModuleId::ScamRecognizer => {
            progress.stats.scam_calls_avoided += input.correct_answers;
        }
        ModuleId::MfaSetup => {
            progress.stats.mfa_setups_completed += 1;
        }
    }

    progress.level = level_for_points(progress.points);

    let qualified = evaluate_badges(progress);
    let new_badges = merge_badges(&mut progress.badges, qualified, now);

    let evaluated = evaluate_achievements(progress);
    let completed_achievements = merge_achievements(&mut progress.achievements, evaluated, now);

    Ok(CompletionDelta {
        points_earned,
        new_badges,
        completed_achievements,
    })
}
