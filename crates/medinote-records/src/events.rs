use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured audit event for record workflow actions.
///
/// Emitted via `tracing`. Note text and analysis details are never part of
/// an event.
#[derive(Debug, Clone, Serialize)]
pub struct RecordEvent {
    pub action: RecordAction,
    pub patient_id: Uuid,
    pub record_id: Option<Uuid>,
    pub severity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordAction {
    Prefilled,
    EscalationPrompted,
    Created,
    Updated,
}

impl RecordAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordAction::Prefilled => "prefilled",
            RecordAction::EscalationPrompted => "escalation_prompted",
            RecordAction::Created => "created",
            RecordAction::Updated => "updated",
        }
    }
}

impl RecordEvent {
    pub fn new(action: RecordAction, patient_id: Uuid, severity: u8) -> Self {
        Self {
            action,
            patient_id,
            record_id: None,
            severity,
        }
    }

    pub fn with_record(mut self, record_id: Uuid) -> Self {
        self.record_id = Some(record_id);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            record.action = self.action.as_str(),
            record.patient_id = %self.patient_id,
            record.id = ?self.record_id,
            record.severity = self.severity,
            "record event"
        );
    }
}
