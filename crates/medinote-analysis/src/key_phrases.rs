//! Key-phrase selector.
//!
//! Picks the most clinically salient sentences from a note, verbatim.

use medinote_core::models::analysis::MAX_KEY_PHRASES;

/// Sentences containing none of these are too generic to be key phrases.
pub const CLINICAL_KEYWORDS: &[&str] = &[
    "patient",
    "symptoms",
    "diagnosis",
    "treatment",
    "medication",
    "condition",
    "blood pressure",
    "heart rate",
    "pain",
    "fever",
    "breathing",
    "chest",
    "examination",
    "assessment",
    "findings",
    "history",
    "presents",
    "reports",
];

const MIN_SENTENCE_LEN: usize = 10;

/// Score one trimmed sentence. `None` if it does not qualify.
pub fn score_sentence(sentence: &str) -> Option<i32> {
    let len = sentence.chars().count();
    if len < MIN_SENTENCE_LEN {
        return None;
    }

    let lower = sentence.to_lowercase();
    let keyword_hits = CLINICAL_KEYWORDS
        .iter()
        .filter(|k| lower.contains(*k))
        .count() as i32;
    if keyword_hits == 0 {
        return None;
    }

    let mut score = keyword_hits;
    if len < 100 {
        score += 1;
    }
    if len < 50 {
        score += 1;
    }
    if len > 200 {
        score -= 2;
    }
    Some(score)
}

/// Select up to three key phrases, highest score first; equal scores keep
/// their order of appearance.
pub fn select_key_phrases(text: &str) -> Vec<String> {
    let mut scored: Vec<(i32, &str)> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter_map(|s| score_sentence(s).map(|score| (score, s)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_KEY_PHRASES)
        .map(|(_, s)| s.to_string())
        .collect()
}
