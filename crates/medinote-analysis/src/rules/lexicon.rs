/// A weighted word list for sentiment scoring.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub name: &'static str,
    pub weight: u32,
    pub polarity: LexiconPolarity,
    pub words: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconPolarity {
    Concern,
    Reassurance,
}

/// The largest weight any single hit can carry. Polarity is normalized by
/// `total_hits * MAX_WEIGHT`.
pub const MAX_WEIGHT: u32 = 3;

/// Hits at which magnitude saturates at 1.0.
pub const MAGNITUDE_SATURATION: u32 = 5;

pub static LEXICONS: &[Lexicon] = &[
    Lexicon {
        name: "severe concern",
        weight: 3,
        polarity: LexiconPolarity::Concern,
        words: &[
            "critical",
            "severe",
            "emergency",
            "unresponsive",
            "unconscious",
            "life-threatening",
            "deteriorating",
            "worsening",
            "acute",
            "alarming",
            "urgent",
        ],
    },
    Lexicon {
        name: "moderate concern",
        weight: 2,
        polarity: LexiconPolarity::Concern,
        words: &[
            "pain(?:ful)?",
            "concern",
            "concerning",
            "abnormal",
            "elevated",
            "persistent",
            "fever",
            "discomfort",
            "difficulty",
            "worried",
            "unstable",
            "irregular",
            "swelling",
        ],
    },
    Lexicon {
        name: "reassurance",
        weight: 2,
        polarity: LexiconPolarity::Reassurance,
        words: &[
            "stable",
            "normal",
            "improved",
            "improving",
            "resolved",
            "recovering",
            "unremarkable",
            "routine",
            "comfortable",
            "healthy",
            "controlled",
        ],
    },
];
