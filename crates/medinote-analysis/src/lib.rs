//! medinote-analysis
//!
//! Deterministic clinical-note analysis. Pure functions over static rule
//! tables: no I/O, no shared mutable state, safe to call from any thread.
//!
//! [`analyze`] runs the five stages over one note and assembles an
//! [`AnalysisResult`]:
//!
//! - [`terminology`]: medical entities with category and confidence
//! - [`sentiment`]: concern polarity and magnitude
//! - [`key_phrases`]: up to three salient sentences
//! - [`diagnosis`]: candidate diagnosis labels in catalog order
//! - [`severity`]: a 1-10 urgency score

pub mod diagnosis;
pub mod error;
pub mod key_phrases;
pub mod rules;
pub mod sentiment;
pub mod severity;
pub mod terminology;
pub mod vitals;

use tracing::debug;

use medinote_core::models::analysis::AnalysisResult;

use error::AnalysisError;

/// Analyze a clinical note.
///
/// `None`, empty, and whitespace-only input return
/// [`AnalysisResult::empty`], whose severity is the baseline 5: no
/// information means unknown, not safe.
pub fn analyze<'a>(text: impl Into<Option<&'a str>>) -> AnalysisResult {
    let Some(text) = text.into().filter(|t| !t.trim().is_empty()) else {
        return AnalysisResult::empty();
    };

    let result = AnalysisResult {
        entities: terminology::extract_entities(text),
        sentiment: sentiment::score_sentiment(text),
        key_phrases: key_phrases::select_key_phrases(text),
        suggested_diagnoses: diagnosis::suggest_diagnoses(text),
        severity: severity::assess_severity(text),
    };

    debug!(
        entities = result.entities.len(),
        diagnoses = result.suggested_diagnoses.len(),
        key_phrases = result.key_phrases.len(),
        severity = result.severity.value(),
        "note analyzed"
    );
    result
}

/// Analyze raw bytes. Invalid UTF-8 is replaced rather than rejected.
pub fn analyze_bytes(bytes: &[u8]) -> AnalysisResult {
    let text = String::from_utf8_lossy(bytes);
    analyze(&*text)
}

/// Analyze note text arriving as untyped JSON.
///
/// Strings are analyzed and `null` yields the empty result. Any other JSON
/// type is a caller bug and fails with [`AnalysisError::InvalidInput`].
pub fn analyze_value(value: &serde_json::Value) -> Result<AnalysisResult, AnalysisError> {
    use serde_json::Value;

    match value {
        Value::String(s) => Ok(analyze(s.as_str())),
        Value::Null => Ok(AnalysisResult::empty()),
        Value::Bool(_) => Err(AnalysisError::InvalidInput { found: "boolean" }),
        Value::Number(_) => Err(AnalysisError::InvalidInput { found: "number" }),
        Value::Array(_) => Err(AnalysisError::InvalidInput { found: "array" }),
        Value::Object(_) => Err(AnalysisError::InvalidInput { found: "object" }),
    }
}
