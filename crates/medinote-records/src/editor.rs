//! Record editing with live analysis.
//!
//! Every edit to the note re-runs the analysis so the preview stays
//! current. Committing yields only operator-chosen fields.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use medinote_analysis::analyze;
use medinote_core::models::analysis::AnalysisResult;
use medinote_core::models::entity::Entity;
use medinote_core::models::sentiment::SentimentEstimate;

use crate::action::RecommendedAction;
use crate::config::WorkflowConfig;
use crate::events::{RecordAction, RecordEvent};

/// What the editor shows next to the note while it is being edited.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePreview<'a> {
    pub entities: &'a [Entity],
    pub sentiment: SentimentEstimate,
    pub key_phrases: &'a [String],
}

/// The fields an edit commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecordUpdate {
    pub record_id: Uuid,
    pub notes: String,
    /// `None` when the operator left the diagnosis untouched.
    pub diagnosis: Option<String>,
    pub recommended_actions: String,
    pub updated_at: Timestamp,
}

pub struct NoteEditor {
    record_id: Uuid,
    patient_id: Uuid,
    config: WorkflowConfig,
    text: String,
    analysis: AnalysisResult,
    diagnosis: Option<String>,
}

impl NoteEditor {
    pub fn open(
        record_id: Uuid,
        patient_id: Uuid,
        text: impl Into<String>,
        config: WorkflowConfig,
    ) -> Self {
        let text = text.into();
        let analysis = analyze(text.as_str());
        Self {
            record_id,
            patient_id,
            config,
            text,
            analysis,
            diagnosis: None,
        }
    }

    /// Replace the note text and refresh the analysis.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.analysis = analyze(self.text.as_str());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.analysis
    }

    pub fn preview(&self) -> NotePreview<'_> {
        let shown = self
            .analysis
            .key_phrases
            .len()
            .min(self.config.max_key_phrases_shown);
        NotePreview {
            entities: &self.analysis.entities,
            sentiment: self.analysis.sentiment,
            key_phrases: &self.analysis.key_phrases[..shown],
        }
    }

    /// The current suggestions joined as a diagnosis field value.
    pub fn suggested_diagnosis(&self) -> String {
        self.analysis
            .suggested_diagnoses
            .join(self.config.diagnosis_separator.as_str())
    }

    pub fn set_diagnosis(&mut self, diagnosis: impl Into<String>) {
        self.diagnosis = Some(diagnosis.into());
    }

    /// Take the current suggestions as the operator's diagnosis.
    pub fn accept_suggested_diagnosis(&mut self) {
        self.diagnosis = Some(self.suggested_diagnosis());
    }

    pub fn recommended_action(&self) -> RecommendedAction {
        RecommendedAction::from_severity(self.analysis.severity, &self.config)
    }

    pub fn commit(&self) -> RecordUpdate {
        let update = RecordUpdate {
            record_id: self.record_id,
            notes: self.text.clone(),
            diagnosis: self.diagnosis.clone(),
            recommended_actions: self.recommended_action().label().to_string(),
            updated_at: Timestamp::now(),
        };

        RecordEvent::new(RecordAction::Updated, self.patient_id, self.analysis.severity.value())
            .with_record(self.record_id)
            .emit();
        update
    }
}
