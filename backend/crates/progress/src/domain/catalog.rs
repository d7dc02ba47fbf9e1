//! Training Module Catalog
//!
//! Immutable, in-process catalog of the training modules. Served read-only
//! over HTTP; the listing carries summaries, the detail view adds lesson
//! content.

use serde::Serialize;

use crate::domain::value_objects::ModuleId;

/// Catalog summary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary {
    pub id: ModuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub estimated_time: &'static str,
    pub image_url: &'static str,
}

/// One lesson section inside a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSection {
    pub title: &'static str,
    pub content: &'static str,
}

/// Lesson content of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContent {
    pub introduction: &'static str,
    pub sections: &'static [ModuleSection],
}

/// Full module detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDetail {
    pub id: ModuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub content: ModuleContent,
}

const CATALOG: [ModuleSummary; 3] = [
    ModuleSummary {
        id: ModuleId::PhishingSpotter,
        title: "Phishing Spotter",
        description: "Learn to identify and avoid phishing emails.",
        difficulty: "Beginner",
        estimated_time: "15 minutes",
        image_url: "/modules/phishing.jpg",
    },
    ModuleSummary {
        id: ModuleId::MfaSetup,
        title: "MFA Setup Guide",
        description: "Set up Multi-Factor Authentication for better security.",
        difficulty: "Intermediate",
        estimated_time: "20 minutes",
        image_url: "/modules/mfa.jpg",
    },
    ModuleSummary {
        id: ModuleId::ScamRecognizer,
        title: "Scam Recognizer",
        description: "Learn to identify common phone and SMS scams.",
        difficulty: "Beginner",
        estimated_time: "15 minutes",
        image_url: "/modules/scam.jpg",
    },
];

/// All modules, in catalog order.
pub fn all_modules() -> &'static [ModuleSummary] {
    &CATALOG
}

/// Full detail for one module.
pub fn module_detail(id: ModuleId) -> ModuleDetail {
    match id {
        ModuleId::PhishingSpotter => ModuleDetail {
            id,
            title: "Phishing Spotter",
            description: "Learn to identify and avoid phishing emails.",
            content: ModuleContent {
                introduction: "This module will teach you how to spot phishing emails.",
                sections: &[
                    ModuleSection {
                        title: "Common Phishing Indicators",
                        content: "Learn about urgent language, suspicious links, and poor grammar.",
                    },
                    ModuleSection {
                        title: "Real-world Examples",
                        content: "Practice with simulated phishing emails.",
                    },
                ],
            },
        },
        ModuleId::MfaSetup => ModuleDetail {
            id,
            title: "MFA Setup Guide",
            description: "Set up Multi-Factor Authentication for better security.",
            content: ModuleContent {
                introduction: "Learn why MFA is important and how to set it up.",
                sections: &[
                    ModuleSection {
                        title: "Understanding MFA",
                        content: "Learn about different types of authentication factors.",
                    },
                    ModuleSection {
                        title: "Setup Guide",
                        content: "Step-by-step guide to enable MFA on common services.",
                    },
                ],
            },
        },
        ModuleId::ScamRecognizer => ModuleDetail {
            id,
            title: "Scam Recognizer",
            description: "Learn to identify common phone and SMS scams.",
            content: ModuleContent {
                introduction: "This module will help you recognize and avoid common scams.",
                sections: &[
                    ModuleSection {
                        title: "Phone Scams",
                        content: "Learn about tech support scams and fake caller IDs.",
                    },
                    ModuleSection {
                        title: "SMS Scams",
                        content: "Identify suspicious text messages and links.",
                    },
                ],
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_module() {
        let ids: Vec<_> = all_modules().iter().map(|m| m.id).collect();
        assert_eq!(ids, ModuleId::ALL.to_vec());
    }

    #[test]
    fn test_detail_exists_for_every_module() {
        for id in ModuleId::ALL {
            let detail = module_detail(id);
            assert_eq!(detail.id, id);
            assert!(!detail.content.sections.is_empty());
        }
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_string(&all_modules()[0]).unwrap();
        assert!(json.contains(r#""id":"phishing-spotter""#));
        assert!(json.contains(r#""estimatedTime":"15 minutes""#));
        assert!(json.contains(r#""imageUrl":"/modules/phishing.jpg""#));
    }
}
