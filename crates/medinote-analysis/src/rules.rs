//! Static rule tables.
//!
//! Everything the engine knows about clinical vocabulary lives here as
//! plain data. The stage modules compile these tables once and scan them
//! in declaration order; nothing mutates them after startup.

pub mod diagnoses;
pub mod lexicon;
pub mod terms;
pub mod tiers;

use regex::Regex;

/// Compile a table pattern for case-insensitive, word-bounded matching.
///
/// Table patterns are regex fragments written by hand, so a failure here
/// is a bug in the table itself.
pub(crate) fn word_regex(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))
        .unwrap_or_else(|e| panic!("invalid word pattern {pattern:?}: {e}"))
}

/// Compile a table pattern for case-insensitive substring/regex matching.
pub(crate) fn loose_regex(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}"))
        .unwrap_or_else(|e| panic!("invalid indicator pattern {pattern:?}: {e}"))
}
