use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entity::Entity;
use super::sentiment::SentimentEstimate;
use super::severity::Severity;

/// Maximum number of key phrases in a result.
pub const MAX_KEY_PHRASES: usize = 3;

/// The structured assessment of one clinical note.
///
/// Created once per analysis and handed to the caller, who owns it from
/// then on. Record workflows may derive form fields from it but never feed
/// it back into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisResult {
    /// Sorted by descending confidence; unique per (lowercased text, category).
    pub entities: Vec<Entity>,
    pub sentiment: SentimentEstimate,
    /// At most [`MAX_KEY_PHRASES`], most relevant first.
    pub key_phrases: Vec<String>,
    /// Catalog order: first rule to fire comes first.
    pub suggested_diagnoses: Vec<String>,
    pub severity: Severity,
}

impl AnalysisResult {
    /// The result for a note with no content.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            sentiment: SentimentEstimate::NEUTRAL,
            key_phrases: Vec::new(),
            suggested_diagnoses: Vec::new(),
            severity: Severity::BASELINE,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::empty()
    }
}
