/// One piece of evidence for a diagnosis.
#[derive(Debug, Clone, Copy)]
pub enum Indicator {
    /// A case-insensitive regex that must match somewhere in the note.
    Pattern(&'static str),
    /// Every pattern must match somewhere in the note, in any order and at
    /// any distance.
    AllOf(&'static [&'static str]),
}

/// A candidate diagnosis and the indicators that suggest it.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosisRule {
    pub label: &'static str,
    pub indicators: &'static [Indicator],
    /// How many indicators must match for the label to be suggested.
    pub min_matches: usize,
}

use Indicator::{AllOf, Pattern};

/// Evaluated in declaration order; suggestions keep this order.
pub static DIAGNOSIS_RULES: &[DiagnosisRule] = &[
    DiagnosisRule {
        label: "Coronary Artery Disease",
        indicators: &[
            Pattern(r"coronary artery disease|\bcad\b|angina"),
            Pattern(r"chest (?:pain|pressure|tightness).*\b(?:exertion|exercise|exerting|activity)"),
            AllOf(&["chest pain", r"short(?:ness)? of breath|dyspno?ea"]),
            AllOf(&[r"chest (?:pain|pressure|tightness)", r"radiat(?:es|ing) to (?:the )?(?:left )?(?:arm|jaw)"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Hypertension",
        indicators: &[
            Pattern("hypertension"),
            Pattern(r"(?:high|elevated|raised) blood pressure"),
            Pattern(r"\b(?:1[4-9]\d|2\d\d)/\d{2,3}\b"),
            Pattern(r"\b\d{2,3}/(?:9\d|1\d\d)\b"),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Heart Failure",
        indicators: &[
            Pattern(r"heart failure|\bchf\b"),
            AllOf(&[r"o?edema|swollen (?:ankles|legs)", r"short(?:ness)? of breath|dyspno?ea|orthopno?ea"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Migraine",
        indicators: &[
            Pattern("migraine"),
            AllOf(&[r"head ?ache", "nausea"]),
            AllOf(&[r"head ?ache", r"(?:light|sound) sensitivity|photophobia|\baura\b"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Respiratory Infection",
        indicators: &[
            AllOf(&["cough", "fever"]),
            Pattern("sore throat"),
            Pattern(r"upper respiratory|\buri\b|bronchitis|chest infection"),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Pneumonia",
        indicators: &[
            Pattern("pneumonia"),
            AllOf(&["cough", "fever", r"short(?:ness)? of breath|dyspno?ea|crackles"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Asthma",
        indicators: &[
            Pattern("asthma"),
            Pattern("wheez"),
            AllOf(&[r"short(?:ness)? of breath", r"inhaler|albuterol|salbutamol"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Type 2 Diabetes",
        indicators: &[
            Pattern("diabet"),
            Pattern(r"\b(?:hba1c|a1c)\b"),
            Pattern(r"(?:blood sugar|glucose) (?:is |was |levels? )?(?:high|elevated|raised)"),
            AllOf(&[
                r"(?:excessive|increased) thirst|polydipsia",
                r"(?:frequent|excessive) urination|polyuria",
            ]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Gastroenteritis",
        indicators: &[
            Pattern(r"gastroenteritis|stomach (?:flu|bug)"),
            AllOf(&[r"nausea|vomit", r"diarrho?ea"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Urinary Tract Infection",
        indicators: &[
            Pattern(r"urinary tract infection|\buti\b"),
            Pattern(r"dysuria|(?:burning|pain(?:ful)?) (?:on|with|during) urination"),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Anxiety Disorder",
        indicators: &[
            Pattern(r"anxiety|anxious"),
            Pattern(r"panic attack"),
            AllOf(&["palpitations", r"worr(?:y|ied)|nervous|restless"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Depression",
        indicators: &[
            Pattern(r"depress(?:ion|ed|ive)"),
            Pattern("hopeless"),
            AllOf(&[r"low mood", r"loss of interest|anhedonia|fatigue"]),
        ],
        min_matches: 1,
    },
    DiagnosisRule {
        label: "Allergic Reaction",
        indicators: &[
            Pattern(r"allerg(?:y|ic)"),
            Pattern("anaphyla"),
            Pattern(r"\bhives\b|urticaria"),
            AllOf(&[r"\brash(?:es)?\b", r"\bitch(?:y|ing|es)?\b"]),
        ],
        min_matches: 1,
    },
];
