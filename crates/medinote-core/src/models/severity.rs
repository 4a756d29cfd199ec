use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Urgency score in `[1, 10]`: 1 is routine, 10 is immediately
/// life-threatening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Severity = Severity(1);
    pub const MAX: Severity = Severity(10);
    /// Absence of information is "unknown/moderate", not "safe".
    pub const BASELINE: Severity = Severity(5);

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Severity(value))
        } else {
            Err(CoreError::SeverityOutOfRange(value.into()))
        }
    }

    /// Clamp any score into range. Used at the end of severity assessment.
    pub fn clamped(value: i64) -> Self {
        Severity(value.clamp(Self::MIN.0.into(), Self::MAX.0.into()) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl TryFrom<u8> for Severity {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> Self {
        s.0
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Severity::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
