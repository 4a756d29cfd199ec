//! Structured vital-sign parsing.

use std::sync::LazyLock;

use regex::Regex;

static BP_READING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{3})/(\d{2,3})\b").expect("valid regex"));

/// A systolic/diastolic blood-pressure reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

/// Every `NNN/NN` or `NNN/NNN` reading in `text`, in order of appearance.
pub fn blood_pressure_readings(text: &str) -> Vec<BloodPressure> {
    BP_READING
        .captures_iter(text)
        .filter_map(|caps| {
            let systolic = caps.get(1)?.as_str().parse().ok()?;
            let diastolic = caps.get(2)?.as_str().parse().ok()?;
            Some(BloodPressure {
                systolic,
                diastolic,
            })
        })
        .collect()
}
