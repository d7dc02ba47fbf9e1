//! Badge Rules
//!
//! Full re-evaluation against data-driven rule tables. Evaluation is pure;
//! merging appends only badges not already held, so re-running the rules
//! never duplicates or revokes anything.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Badge, Progress};
use crate::domain::value_objects::ModuleId;

/// A badge a learner currently qualifies for (not yet stamped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: String,
}

/// Per-module mastery thresholds
struct MasteryRule {
    module: ModuleId,
    min_score: u32,
    badge_id: &'static str,
    badge_name: &'static str,
}

const MASTERY_RULES: [MasteryRule; 3] = [
    MasteryRule {
        module: ModuleId::PhishingSpotter,
        min_score: 90,
        badge_id: "phishing-expert",
        badge_name: "Phishing Expert",
    },
    MasteryRule {
        module: ModuleId::MfaSetup,
        min_score: 85,
        badge_id: "mfa-master",
        badge_name: "MFA Master",
    },
    MasteryRule {
        module: ModuleId::ScamRecognizer,
        min_score: 90,
        badge_id: "scam-detective",
        badge_name: "Scam Detective",
    },
];

/// Aggregate stat thresholds
struct StatRule {
    counter: fn(&Progress) -> u32,
    min_count: u32,
    badge_id: &'static str,
    badge_name: &'static str,
    description: &'static str,
}

const STAT_RULES: [StatRule; 3] = [
    StatRule {
        counter: |p| p.stats.phishing_emails_identified,
        min_count: 50,
        badge_id: "phishing-hunter",
        badge_name: "Phishing Hunter",
        description: "Successfully identified 50 phishing attempts",
    },
    StatRule {
        counter: |p| p.stats.scam_calls_avoided,
        min_count: 30,
        badge_id: "scam-shield",
        badge_name: "Scam Shield",
        description: "Protected yourself from 30 scam calls",
    },
    StatRule {
        counter: |p| p.stats.mfa_setups_completed,
        min_count: 3,
        badge_id: "mfa-guardian",
        badge_name: "MFA Guardian",
        description: "Set up MFA on 3 different platforms",
    },
];

/// Every badge the learner currently qualifies for.
pub fn evaluate_badges(progress: &Progress) -> Vec<BadgeSpec> {
    let mut qualified = Vec::new();

    for rule in &MASTERY_RULES {
        if let Some(attempt) = progress.module_progress.get(&rule.module)
            && attempt.score >= rule.min_score
        {
            qualified.push(BadgeSpec {
                id: rule.badge_id,
                name: rule.badge_name,
                description: format!(
                    "Achieved mastery in {} with a score of {}%",
                    rule.module, attempt.score
                ),
            });
        }
    }

    for rule in &STAT_RULES {
        if (rule.counter)(progress) >= rule.min_count {
            qualified.push(BadgeSpec {
                id: rule.badge_id,
                name: rule.badge_name,
                description: rule.description.to_string(),
            });
        }
    }

    qualified
}

/// Append qualified badges not already held, stamped `earned_at = now`.
/// Returns the newly added badges. Idempotent.
pub fn merge_badges(
    badges: &mut Vec<Badge>,
    qualified: Vec<BadgeSpec>,
    now: DateTime<Utc>,
) -> Vec<Badge> {
    let mut added = Vec::new();

    for spec in qualified {
        if badges.iter().any(|b| b.id == spec.id) {
            continue;
        }

        let badge = Badge {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            description: spec.description,
            image_url: format!("/badges/{}.png", spec.id),
            earned_at: now,
        };

        badges.push(badge.clone());
        added.push(badge);
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ModuleAttempt;

    fn attempt(score: u32) -> ModuleAttempt {
        ModuleAttempt {
            score,
            correct_answers: score / 10,
            total_attempts: 1,
            last_attempt_date: Utc::now(),
        }
    }

    #[test]
    fn test_mastery_thresholds() {
        let mut progress = Progress::default();
        progress
            .module_progress
            .insert(ModuleId::PhishingSpotter, attempt(90));
        progress
            .module_progress
            .insert(ModuleId::MfaSetup, attempt(84));

        let ids: Vec<_> = evaluate_badges(&progress).iter().map(|b| b.id).collect();
        assert!(ids.contains(&"phishing-expert"));
        assert!(!ids.contains(&"mfa-master"));
    }

    #[test]
    fn test_stat_thresholds() {
        let mut progress = Progress::default();
        progress.stats.phishing_emails_identified = 50;
        progress.stats.scam_calls_avoided = 29;
        progress.stats.mfa_setups_completed = 3;

        let ids: Vec<_> = evaluate_badges(&progress).iter().map(|b| b.id).collect();
        assert!(ids.contains(&"phishing-hunter"));
        assert!(!ids.contains(&"scam-shield"));
        assert!(ids.contains(&"mfa-guardian"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut progress = Progress::default();
        progress
            .module_progress
            .insert(ModuleId::ScamRecognizer, attempt(95));

        let now = Utc::now();
        let qualified = evaluate_badges(&progress);
        let added = merge_badges(&mut progress.badges, qualified, now);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].id, "scam-detective");
        assert_eq!(added[0].image_url, "/badges/scam-detective.png");

        let qualified = evaluate_badges(&progress);
        let added_again = merge_badges(&mut progress.badges, qualified, now);
        assert!(added_again.is_empty());
        assert_eq!(progress.badges.len(), 1);
    }

    #[test]
    fn test_merge_preserves_original_earned_at() {
        let mut progress = Progress::default();
        progress
            .module_progress
            .insert(ModuleId::ScamRecognizer, attempt(95));

        let first = Utc::now();
        let qualified = evaluate_badges(&progress);
        merge_badges(&mut progress.badges, qualified, first);

        let later = first + chrono::Duration::days(2);
        let qualified = evaluate_badges(&progress);
        merge_badges(&mut progress.badges, qualified, later);

        assert_eq!(progress.badges[0].earned_at, first);
    }
}
