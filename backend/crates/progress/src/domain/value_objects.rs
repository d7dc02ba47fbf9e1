//! Domain Value Objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Identifier of a training module.
///
/// A closed set: module ids arriving from the outside deserialize through
/// this enum, so an unknown id is rejected before any domain logic runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    PhishingSpotter,
    MfaSetup,
    ScamRecognizer,
}

impl ModuleId {
    /// All modules, in catalog order
    pub const ALL: [ModuleId; 3] = [
        ModuleId::PhishingSpotter,
        ModuleId::MfaSetup,
        ModuleId::ScamRecognizer,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ModuleId::PhishingSpotter => "phishing-spotter",
            ModuleId::MfaSetup => "mfa-setup",
            ModuleId::ScamRecognizer => "scam-recognizer",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phishing-spotter" => Ok(ModuleId::PhishingSpotter),
            "mfa-setup" => Ok(ModuleId::MfaSetup),
            "scam-recognizer" => Ok(ModuleId::ScamRecognizer),
            other => Err(ProgressError::UnknownModule(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms_are_kebab_case() {
        assert_eq!(ModuleId::PhishingSpotter.as_str(), "phishing-spotter");
        assert_eq!(ModuleId::MfaSetup.as_str(), "mfa-setup");
        assert_eq!(ModuleId::ScamRecognizer.as_str(), "scam-recognizer");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for module in ModuleId::ALL {
            assert_eq!(module.as_str().parse::<ModuleId>().unwrap(), module);
        }
    }

    #[test]
    fn test_unknown_module_rejected() {
        assert!(matches!(
            "password-drills".parse::<ModuleId>(),
            Err(ProgressError::UnknownModule(_))
        ));
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&ModuleId::MfaSetup).unwrap();
        assert_eq!(json, r#""mfa-setup""#);
        let parsed: ModuleId = serde_json::from_str(r#""scam-recognizer""#).unwrap();
        assert_eq!(parsed, ModuleId::ScamRecognizer);
    }

    #[test]
    fn test_unknown_module_fails_deserialization() {
        assert!(serde_json::from_str::<ModuleId>(r#""unknown-module""#).is_err());
    }
}
