/// How a tier moves the running severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierEffect {
    /// `severity = max(severity, n)`
    Floor(u8),
    /// `severity = min(severity, n)`
    Ceiling(u8),
}

impl TierEffect {
    pub fn apply(&self, severity: i64) -> i64 {
        match *self {
            TierEffect::Floor(n) => severity.max(n.into()),
            TierEffect::Ceiling(n) => severity.min(n.into()),
        }
    }
}

/// A severity word list. Tiers are disjoint.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTier {
    pub name: &'static str,
    pub effect: TierEffect,
    pub words: &'static [&'static str],
}

/// Two concepts that together raise the floor, wherever they appear.
#[derive(Debug, Clone, Copy)]
pub struct CompoundBoost {
    pub terms: [&'static str; 2],
    pub floor: u8,
}

/// Blood-pressure thresholds. A reading above either limit of a band
/// earns that band's floor.
#[derive(Debug, Clone, Copy)]
pub struct PressureBand {
    pub systolic_above: u16,
    pub diastolic_above: u16,
    pub floor: u8,
}

pub const BASELINE: i64 = 5;

/// Passes run in this order over one accumulator: critical, high, low.
/// Low runs last as a `min`, so it can pull a raised score back down.
pub static TIERS: &[SeverityTier] = &[
    SeverityTier {
        name: "critical",
        effect: TierEffect::Floor(8),
        words: &[
            "critical",
            "unresponsive",
            "unconscious",
            "cardiac arrest",
            "heart attack",
            "stroke",
            "seizures?",
            "chest pain",
            "severe bleeding",
            "haemorrhage",
            "hemorrhage",
            "anaphylaxis",
            "anaphylactic",
            "respiratory distress",
            "not breathing",
            "suicidal",
            "overdose",
            "sepsis",
        ],
    },
    SeverityTier {
        name: "high",
        effect: TierEffect::Floor(6),
        words: &[
            "severe",
            "acute",
            "worsening",
            "deteriorating",
            "high fever",
            "shortness of breath",
            "difficulty breathing",
            "fracture",
            "dehydration",
            "confusion",
            "syncope",
            "fainting",
            "vomiting blood",
            "uncontrolled",
        ],
    },
    SeverityTier {
        name: "low",
        effect: TierEffect::Ceiling(4),
        words: &[
            "mild",
            "stable",
            "routine",
            "follow-up",
            "minor",
            "normal",
            "improving",
            "improved",
            "resolved",
            "resolving",
            "slight",
            "check-up",
            "checkup",
        ],
    },
];

pub static COMPOUND_BOOSTS: &[CompoundBoost] = &[
    CompoundBoost {
        terms: ["pain(?:ful)?", "severe"],
        floor: 7,
    },
    CompoundBoost {
        terms: ["blood pressure", "high"],
        floor: 6,
    },
    CompoundBoost {
        terms: ["fever", "high"],
        floor: 6,
    },
];

/// Checked most severe first; the first band a reading exceeds wins.
pub static PRESSURE_BANDS: &[PressureBand] = &[
    PressureBand {
        systolic_above: 180,
        diastolic_above: 110,
        floor: 9,
    },
    PressureBand {
        systolic_above: 160,
        diastolic_above: 100,
        floor: 7,
    },
];
