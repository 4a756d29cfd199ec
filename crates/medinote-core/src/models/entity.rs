use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The closed set of categories a detected term can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityCategory {
    Symptom,
    Vital,
    Condition,
    Medication,
    Procedure,
    Psychological,
    Lifestyle,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 7] = [
        EntityCategory::Symptom,
        EntityCategory::Vital,
        EntityCategory::Condition,
        EntityCategory::Medication,
        EntityCategory::Procedure,
        EntityCategory::Psychological,
        EntityCategory::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Symptom => "symptom",
            EntityCategory::Vital => "vital",
            EntityCategory::Condition => "condition",
            EntityCategory::Medication => "medication",
            EntityCategory::Procedure => "procedure",
            EntityCategory::Psychological => "psychological",
            EntityCategory::Lifestyle => "lifestyle",
        }
    }

    /// Conditions and medications name something specific, so matches in
    /// these categories carry extra confidence.
    pub fn is_specific(&self) -> bool {
        matches!(self, EntityCategory::Condition | EntityCategory::Medication)
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// One detected term occurrence.
///
/// `text` is the matched substring with the note's original casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub text: String,
    pub category: EntityCategory,
    /// In `[0, 1]`.
    pub confidence: f64,
}

impl Entity {
    /// Identity used for deduplication: lowercased text plus category.
    pub fn dedup_key(&self) -> (String, EntityCategory) {
        (self.text.to_lowercase(), self.category)
    }
}
