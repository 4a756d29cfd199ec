//! Severity assessor.
//!
//! Starts from a baseline of 5 and floats the score through three lexicon
//! passes (critical, high, low), then compound co-occurrence boosts, then
//! blood-pressure readings. The low pass is a `min` applied after the
//! floors, so a low-tier word caps a score that critical or high words
//! raised earlier in the scan.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use medinote_core::models::severity::Severity;

use crate::rules::tiers::{
    BASELINE, COMPOUND_BOOSTS, CompoundBoost, PRESSURE_BANDS, SeverityTier, TIERS, TierEffect,
};
use crate::rules::word_regex;
use crate::vitals::{BloodPressure, blood_pressure_readings};

static TIER_WORDS: LazyLock<Vec<(TierEffect, Vec<Regex>)>> = LazyLock::new(|| {
    TIERS
        .iter()
        .map(|tier| (tier.effect, tier.words.iter().map(|w| word_regex(w)).collect()))
        .collect()
});

static BOOSTS: LazyLock<Vec<(u8, [Regex; 2])>> = LazyLock::new(|| {
    COMPOUND_BOOSTS
        .iter()
        .map(|b| (b.floor, b.terms.map(word_regex)))
        .collect()
});

/// The severity tiers in pass order.
pub fn tiers() -> &'static [SeverityTier] {
    TIERS
}

pub fn compound_boosts() -> &'static [CompoundBoost] {
    COMPOUND_BOOSTS
}

/// The floor a single reading earns, if any.
pub fn pressure_floor(reading: BloodPressure) -> Option<u8> {
    PRESSURE_BANDS
        .iter()
        .find(|band| {
            reading.systolic > band.systolic_above || reading.diastolic > band.diastolic_above
        })
        .map(|band| band.floor)
}

/// Score the urgency of `text` in `[1, 10]`.
pub fn assess_severity(text: &str) -> Severity {
    let mut severity = BASELINE;

    for (effect, words) in TIER_WORDS.iter() {
        for re in words {
            if re.is_match(text) {
                severity = effect.apply(severity);
            }
        }
    }
    trace!(severity, "after tier passes");

    for (floor, [a, b]) in BOOSTS.iter() {
        if a.is_match(text) && b.is_match(text) {
            severity = severity.max((*floor).into());
        }
    }

    if let Some(floor) = blood_pressure_readings(text)
        .into_iter()
        .filter_map(pressure_floor)
        .max()
    {
        severity = severity.max(floor.into());
    }

    Severity::clamped(severity)
}
