//! Record creation.
//!
//! The operator types the presenting symptoms; the draft is pre-filled from
//! the analysis and every pre-filled field stays open to operator override
//! until the record is committed.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use medinote_analysis::analyze;
use medinote_core::models::analysis::AnalysisResult;
use medinote_core::models::severity::Severity;

use crate::action::{RecommendedAction, requires_escalation};
use crate::config::WorkflowConfig;
use crate::events::{RecordAction, RecordEvent};

/// A record being created, before the operator commits it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecordDraft {
    pub patient_id: Uuid,
    pub symptoms: String,
    pub diagnosis: String,
    pub severity: Severity,
    pub recommended_action: RecommendedAction,
    /// Drives the critical-care escalation prompt.
    pub requires_escalation: bool,
    /// Shown alongside the form; dropped on commit.
    pub analysis: AnalysisResult,
    pub analyzed_at: Timestamp,
}

/// The committed record: only the fields the operator saw and accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub symptoms: String,
    pub diagnosis: String,
    pub severity: Severity,
    pub recommended_actions: String,
    pub created_at: Timestamp,
}

impl RecordDraft {
    /// Analyze `symptoms` and pre-fill the diagnosis, severity, and
    /// recommended action.
    pub fn prefill(patient_id: Uuid, symptoms: &str, config: &WorkflowConfig) -> Self {
        let analysis = analyze(symptoms);
        let severity = analysis.severity;
        let draft = Self {
            patient_id,
            symptoms: symptoms.to_string(),
            diagnosis: analysis
                .suggested_diagnoses
                .join(config.diagnosis_separator.as_str()),
            severity,
            recommended_action: RecommendedAction::from_severity(severity, config),
            requires_escalation: requires_escalation(severity, config),
            analysis,
            analyzed_at: Timestamp::now(),
        };

        RecordEvent::new(RecordAction::Prefilled, patient_id, severity.value()).emit();
        if draft.requires_escalation {
            RecordEvent::new(RecordAction::EscalationPrompted, patient_id, severity.value()).emit();
        }
        draft
    }

    pub fn override_diagnosis(&mut self, diagnosis: impl Into<String>) {
        self.diagnosis = diagnosis.into();
    }

    /// Replace the pre-filled severity. The recommended action and
    /// escalation prompt follow the new value.
    pub fn override_severity(&mut self, severity: Severity, config: &WorkflowConfig) {
        self.severity = severity;
        self.recommended_action = RecommendedAction::from_severity(severity, config);
        self.requires_escalation = requires_escalation(severity, config);
    }

    pub fn commit(self) -> NewRecord {
        let record = NewRecord {
            id: Uuid::new_v4(),
            patient_id: self.patient_id,
            symptoms: self.symptoms,
            diagnosis: self.diagnosis,
            severity: self.severity,
            recommended_actions: self.recommended_action.label().to_string(),
            created_at: Timestamp::now(),
        };

        RecordEvent::new(RecordAction::Created, record.patient_id, record.severity.value())
            .with_record(record.id)
            .emit();
        record
    }
}
