use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medinote_core::models::analysis::MAX_KEY_PHRASES;

use crate::error::RecordsError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Settings for the record-creation and record-editing workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkflowConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Severity at or above which the critical-care escalation prompt is
    /// shown and the recommended action is "seek immediate attention".
    #[serde(default = "default_escalation_threshold")]
    pub escalation_threshold: u8,
    /// Severity at or above which an appointment is recommended.
    #[serde(default = "default_appointment_threshold")]
    pub appointment_threshold: u8,
    /// Joins suggested diagnoses into the diagnosis field. Added in v1.
    #[serde(default = "default_diagnosis_separator")]
    pub diagnosis_separator: String,
    /// How many key phrases the editor preview shows.
    #[serde(default = "default_max_key_phrases_shown")]
    pub max_key_phrases_shown: usize,
}

fn default_escalation_threshold() -> u8 {
    8
}

fn default_appointment_threshold() -> u8 {
    6
}

fn default_diagnosis_separator() -> String {
    ", ".to_string()
}

fn default_max_key_phrases_shown() -> usize {
    MAX_KEY_PHRASES
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            escalation_threshold: default_escalation_threshold(),
            appointment_threshold: default_appointment_threshold(),
            diagnosis_separator: default_diagnosis_separator(),
            max_key_phrases_shown: default_max_key_phrases_shown(),
        }
    }
}

impl WorkflowConfig {
    pub fn validate(&self) -> Result<(), RecordsError> {
        for (name, value) in [
            ("escalation_threshold", self.escalation_threshold),
            ("appointment_threshold", self.appointment_threshold),
        ] {
            if !(1..=10).contains(&value) {
                return Err(RecordsError::InvalidConfig(format!(
                    "{name} {value} is outside range [1, 10]"
                )));
            }
        }
        if self.appointment_threshold > self.escalation_threshold {
            return Err(RecordsError::InvalidConfig(format!(
                "appointment_threshold {} exceeds escalation_threshold {}",
                self.appointment_threshold, self.escalation_threshold
            )));
        }
        if self.max_key_phrases_shown > MAX_KEY_PHRASES {
            return Err(RecordsError::InvalidConfig(format!(
                "max_key_phrases_shown {} exceeds {MAX_KEY_PHRASES}",
                self.max_key_phrases_shown
            )));
        }
        Ok(())
    }
}

/// Parse, migrate, and validate a config from JSON text.
pub fn parse_config(contents: &str) -> Result<WorkflowConfig, RecordsError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: WorkflowConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<WorkflowConfig, RecordsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RecordsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Validate and write `config`, always stamped with [`CURRENT_VERSION`].
pub fn save_config(path: &Path, config: &WorkflowConfig) -> Result<(), RecordsError> {
    config.validate()?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let contents = serde_json::to_string_pretty(&stamped)?;

    let write_err = |source: std::io::Error| RecordsError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, contents.as_bytes()).map_err(write_err)?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(write_err)?;
    }

    std::fs::rename(&tmp_path, path).map_err(write_err)?;
    tracing::info!(path = %path.display(), "workflow config saved");
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, RecordsError> {
    if from_version > CURRENT_VERSION {
        return Err(RecordsError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add diagnosis_separator
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(RecordsError::ConfigShape)?;
        obj.entry("diagnosis_separator")
            .or_insert(serde_json::Value::String(default_diagnosis_separator()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated workflow config v0 → v1 (added diagnosis_separator)");
    }

    Ok(json)
}
