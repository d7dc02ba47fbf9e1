//! Domain Entities
//!
//! The gamification state of one learner. The whole `Progress` aggregate
//! serializes to a single JSONB record; field names are camelCase on the
//! wire and in storage. `BTreeMap`/`BTreeSet` keep the serialized form
//! deterministic.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModuleId;

/// Latest attempt at one module. Overwritten on every completion; only
/// the most recent attempt is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAttempt {
    /// Percentage score, 0..=100
    pub score: u32,
    pub correct_answers: u32,
    /// Number of tries taken, >= 1
    pub total_attempts: u32,
    pub last_attempt_date: DateTime<Utc>,
}

/// An earned badge. At most one per badge id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub earned_at: DateTime<Utc>,
}

/// Achievement progress. Completion is sticky: once `completed` with
/// `earned_at` stamped, neither is ever cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub completed: bool,
    pub earned_at: Option<DateTime<Utc>>,
}

/// Aggregate counters. Strictly additive, never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub phishing_emails_identified: u32,
    pub scam_calls_avoided: u32,
    pub mfa_setups_completed: u32,
    /// Minutes spent across all modules
    pub total_time_spent: u32,
    pub login_streak: u32,
    pub last_login_date: Option<DateTime<Utc>>,
}

impl Stats {
    /// Roll the daily login streak.
    ///
    /// Same UTC day as the last login: leaves the stats untouched and
    /// returns false, so callers can skip persisting. The day after:
    /// streak + 1. Any gap, or the first login ever: streak resets to 1.
    /// `last_login_date` advances only when the streak rolls.
    ///
    /// Returns true when anything changed.
    pub fn record_daily_login(&mut self, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();

        match self.last_login_date {
            Some(last) if last.date_naive() == today => return false,
            Some(last) if last.date_naive().succ_opt() == Some(today) => {
                self.login_streak += 1;
            }
            _ => {
                self.login_streak = 1;
            }
        }

        self.last_login_date = Some(now);
        true
    }
}

/// One learner's complete gamification state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progress {
    pub completed_modules: BTreeSet<ModuleId>,
    pub module_progress: BTreeMap<ModuleId, ModuleAttempt>,
    pub points: i64,
    pub level: i64,
    pub badges: Vec<Badge>,
    pub achievements: Vec<Achievement>,
    pub stats: Stats,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed_modules: BTreeSet::new(),
            module_progress: BTreeMap::new(),
            points: 0,
            level: 1,
            badges: Vec::new(),
            achievements: Vec::new(),
            stats: Stats::default(),
        }
    }
}

impl Progress {
    pub fn badge_count(&self) -> usize {
        self.badges.len()
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }
}
