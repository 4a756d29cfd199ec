//! Diagnosis suggester.

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::diagnoses::{DIAGNOSIS_RULES, DiagnosisRule, Indicator};
use crate::rules::loose_regex;

enum CompiledIndicator {
    Pattern(Regex),
    AllOf(Vec<Regex>),
}

impl CompiledIndicator {
    fn compile(indicator: &Indicator) -> Self {
        match indicator {
            Indicator::Pattern(p) => CompiledIndicator::Pattern(loose_regex(p)),
            Indicator::AllOf(ps) => CompiledIndicator::AllOf(ps.iter().map(|p| loose_regex(p)).collect()),
        }
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            CompiledIndicator::Pattern(re) => re.is_match(text),
            CompiledIndicator::AllOf(res) => res.iter().all(|re| re.is_match(text)),
        }
    }
}

static COMPILED: LazyLock<Vec<(&'static DiagnosisRule, Vec<CompiledIndicator>)>> =
    LazyLock::new(|| {
        DIAGNOSIS_RULES
            .iter()
            .map(|rule| {
                let indicators = rule.indicators.iter().map(CompiledIndicator::compile).collect();
                (rule, indicators)
            })
            .collect()
    });

/// The diagnosis catalog in evaluation order.
pub fn catalog() -> &'static [DiagnosisRule] {
    DIAGNOSIS_RULES
}

/// Look up a rule by its label.
pub fn rule_for(label: &str) -> Option<&'static DiagnosisRule> {
    DIAGNOSIS_RULES.iter().find(|r| r.label == label)
}

/// How many of a rule's indicators match `text`. `None` for an unknown label.
pub fn indicator_matches(label: &str, text: &str) -> Option<usize> {
    COMPILED
        .iter()
        .find(|(rule, _)| rule.label == label)
        .map(|(_, indicators)| indicators.iter().filter(|i| i.matches(text)).count())
}

/// Every label whose rule fires, in catalog order. Rules are independent:
/// several may fire for one note.
pub fn suggest_diagnoses(text: &str) -> Vec<String> {
    COMPILED
        .iter()
        .filter(|(rule, indicators)| {
            indicators.iter().filter(|i| i.matches(text)).count() >= rule.min_matches
        })
        .map(|(rule, _)| rule.label.to_string())
        .collect()
}
