use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medinote_core::models::severity::Severity;

use crate::config::WorkflowConfig;

/// What the record recommends the patient do, banded by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendedAction {
    /// Severity at or above the escalation threshold (8 by default).
    SeekImmediateAttention,
    /// Severity at or above the appointment threshold (6 by default).
    ScheduleAppointment,
    RestAndMonitor,
}

impl RecommendedAction {
    pub fn from_severity(severity: Severity, config: &WorkflowConfig) -> Self {
        let value = severity.value();
        if value >= config.escalation_threshold {
            RecommendedAction::SeekImmediateAttention
        } else if value >= config.appointment_threshold {
            RecommendedAction::ScheduleAppointment
        } else {
            RecommendedAction::RestAndMonitor
        }
    }

    /// The text written into the record's recommended-actions field.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedAction::SeekImmediateAttention => "Seek immediate attention",
            RecommendedAction::ScheduleAppointment => "Schedule appointment within 24-48 hours",
            RecommendedAction::RestAndMonitor => "Rest and monitor symptoms",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the critical-care escalation prompt should be shown.
pub fn requires_escalation(severity: Severity, config: &WorkflowConfig) -> bool {
    severity.value() >= config.escalation_threshold
}
