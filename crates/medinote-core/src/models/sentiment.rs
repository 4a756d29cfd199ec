use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Concern polarity of a note and how strongly the lexicon supports it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentEstimate {
    /// `[-1, 1]`: negative is concerning, positive is reassuring.
    pub polarity: f64,
    /// `[0, 1]`, independent of sign.
    pub magnitude: f64,
}

impl SentimentEstimate {
    pub const NEUTRAL: SentimentEstimate = SentimentEstimate {
        polarity: 0.0,
        magnitude: 0.0,
    };

    pub fn is_concerning(&self) -> bool {
        self.polarity < 0.0
    }

    pub fn is_reassuring(&self) -> bool {
        self.polarity > 0.0
    }
}
