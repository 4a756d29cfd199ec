//! Sentiment scorer.

use std::sync::LazyLock;

use regex::Regex;

use medinote_core::models::sentiment::SentimentEstimate;

use crate::rules::lexicon::{LEXICONS, LexiconPolarity, MAGNITUDE_SATURATION, MAX_WEIGHT};
use crate::rules::word_regex;

static WORDS: LazyLock<Vec<(u32, LexiconPolarity, Regex)>> = LazyLock::new(|| {
    LEXICONS
        .iter()
        .flat_map(|lex| {
            lex.words
                .iter()
                .map(move |w| (lex.weight, lex.polarity, word_regex(w)))
        })
        .collect()
});

/// Weighted lexicon hits found in a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconTally {
    pub concern: u32,
    pub reassurance: u32,
    /// Unweighted count of every hit across all lexicons.
    pub total_hits: u32,
}

pub fn tally(text: &str) -> LexiconTally {
    let mut tally = LexiconTally::default();
    for (weight, polarity, re) in WORDS.iter() {
        let hits = re.find_iter(text).count() as u32;
        if hits == 0 {
            continue;
        }
        match polarity {
            LexiconPolarity::Concern => tally.concern += hits * weight,
            LexiconPolarity::Reassurance => tally.reassurance += hits * weight,
        }
        tally.total_hits += hits;
    }
    tally
}

/// Estimate concern polarity and strength from the weighted lexicons.
pub fn score_sentiment(text: &str) -> SentimentEstimate {
    let tally = tally(text);
    if tally.total_hits == 0 {
        return SentimentEstimate::NEUTRAL;
    }

    let net = f64::from(tally.reassurance) - f64::from(tally.concern);
    let polarity = (net / f64::from(tally.total_hits * MAX_WEIGHT)).clamp(-1.0, 1.0);
    let magnitude = (f64::from(tally.total_hits) / f64::from(MAGNITUDE_SATURATION)).min(1.0);

    SentimentEstimate {
        polarity,
        magnitude,
    }
}
