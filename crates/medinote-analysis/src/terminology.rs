//! Terminology matcher.
//!
//! Finds every surface form from the term groups, classifies it, scores a
//! confidence, and merges duplicates.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use medinote_core::models::entity::{Entity, EntityCategory};

use crate::rules::terms::{
    BASE_CONFIDENCE, CONTEXT_BONUS, CONTEXT_WORDS, SPECIFIC_CATEGORY_BONUS, TERM_GROUPS, TermGroup,
};
use crate::rules::word_regex;

struct CompiledGroup {
    category: EntityCategory,
    patterns: Vec<Regex>,
}

static GROUPS: LazyLock<Vec<CompiledGroup>> = LazyLock::new(|| {
    TERM_GROUPS
        .iter()
        .map(|g| CompiledGroup {
            category: g.category,
            patterns: g.patterns.iter().map(|p| word_regex(p)).collect(),
        })
        .collect()
});

static CONTEXT: LazyLock<Regex> = LazyLock::new(|| word_regex(&CONTEXT_WORDS.join("|")));

/// The term groups in scan order.
pub fn term_groups() -> &'static [TermGroup] {
    TERM_GROUPS
}

/// Confidence for a match in `category`, given whether the note carries
/// clinical context words.
///
/// Rounded to two decimals so the bonuses sum exactly (0.7 + 0.2 + 0.1 is
/// 1.0, not 0.9999999999999999), then clamped to 1.0.
pub fn confidence_for(category: EntityCategory, has_context: bool) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    if category.is_specific() {
        confidence += SPECIFIC_CATEGORY_BONUS;
    }
    if has_context {
        confidence += CONTEXT_BONUS;
    }
    ((confidence * 100.0).round() / 100.0).min(1.0)
}

/// Detect medical entities in `text`.
///
/// Overlapping matches from different groups are all kept. Only an exact
/// repeat of (lowercased text, category) is merged, keeping the highest
/// confidence. The result is sorted by descending confidence, with ties in
/// the order they were first found.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let has_context = CONTEXT.is_match(text);

    let mut entities: Vec<Entity> = Vec::new();
    let mut seen: HashMap<(String, EntityCategory), usize> = HashMap::new();

    for group in GROUPS.iter() {
        let confidence = confidence_for(group.category, has_context);
        for pattern in &group.patterns {
            for m in pattern.find_iter(text) {
                let candidate = Entity {
                    text: m.as_str().to_string(),
                    category: group.category,
                    confidence,
                };
                match seen.get(&candidate.dedup_key()) {
                    Some(&idx) => {
                        let existing = &mut entities[idx];
                        existing.confidence = existing.confidence.max(candidate.confidence);
                    }
                    None => {
                        seen.insert(candidate.dedup_key(), entities.len());
                        entities.push(candidate);
                    }
                }
            }
        }
    }

    entities.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    entities
}
