use medinote_core::models::entity::EntityCategory;

/// A named set of surface forms that all map to one entity category.
#[derive(Debug, Clone, Copy)]
pub struct TermGroup {
    pub name: &'static str,
    pub category: EntityCategory,
    /// Regex fragments, matched case-insensitively on word boundaries.
    pub patterns: &'static [&'static str],
}

/// Words whose presence anywhere in a note raises confidence in every match.
pub const CONTEXT_WORDS: &[&str] = &["patient", "symptoms", "diagnosis", "treatment", "clinical"];

pub const BASE_CONFIDENCE: f64 = 0.7;
pub const SPECIFIC_CATEGORY_BONUS: f64 = 0.2;
pub const CONTEXT_BONUS: f64 = 0.1;

pub static TERM_GROUPS: &[TermGroup] = &[
    TermGroup {
        name: "symptoms",
        category: EntityCategory::Symptom,
        patterns: &[
            "head ?aches?",
            "chest (?:pain|tightness|pressure)",
            "short(?:ness)? of breath",
            "dyspno?ea",
            "nausea",
            "vomit(?:ing)?",
            "dizz(?:y|iness)",
            "fatigue",
            "fever",
            "cough(?:ing)?",
            "abdominal pain",
            "back pain",
            "joint pain",
            "rash",
            "palpitations?",
            "sore throat",
            "diarrho?ea",
            "chills",
            "swelling",
            "o?edema",
            "wheez(?:e|ing)",
            "numbness",
            "blurred vision",
        ],
    },
    TermGroup {
        name: "vital signs",
        category: EntityCategory::Vital,
        patterns: &[
            "blood pressure",
            "bp",
            r"\d{2,3}/\d{2,3}",
            "heart rate",
            "pulse",
            "temperature",
            "respiratory rate",
            "oxygen saturation",
            "spo2",
            "o2 sat(?:uration)?",
            "bmi",
            "weight",
        ],
    },
    TermGroup {
        name: "conditions",
        category: EntityCategory::Condition,
        patterns: &[
            "hypertension",
            "diabetes(?: mellitus)?",
            "asthma",
            "copd",
            "pneumonia",
            "coronary artery disease",
            "heart failure",
            "atrial fibrillation",
            "angina",
            "migraines?",
            "arthritis",
            "anae?mia",
            "hypothyroidism",
            "hyperlipidae?mia",
            "chest infection",
            "bronchitis",
            "gastroenteritis",
            "urinary tract infection",
            "stroke",
        ],
    },
    TermGroup {
        name: "medications",
        category: EntityCategory::Medication,
        patterns: &[
            "aspirin",
            "ibuprofen",
            "acetaminophen",
            "paracetamol",
            "metformin",
            "lisinopril",
            "amlodipine",
            "atorvastatin",
            "insulin",
            "albuterol",
            "salbutamol",
            "amoxicillin",
            "omeprazole",
            "sertraline",
            "nitroglycerin",
            "warfarin",
            "antibiotics?",
            "beta[- ]blockers?",
            "statins?",
            "antihypertensives?",
            "antidepressants?",
            "inhalers?",
            "painkillers?",
            "analgesics?",
        ],
    },
    TermGroup {
        name: "procedures",
        category: EntityCategory::Procedure,
        patterns: &[
            "ecg",
            "ekg",
            "electrocardiogram",
            "echocardiogram",
            "x-?rays?",
            "ct scan",
            "mri",
            "blood tests?",
            "biopsy",
            "ultrasound",
            "surgery",
            "urinalysis",
            "physical exam(?:ination)?",
            "stress test",
            "vaccinations?",
        ],
    },
    TermGroup {
        name: "psychological",
        category: EntityCategory::Psychological,
        patterns: &[
            "anxiety",
            "anxious",
            "depression",
            "depressed",
            "stress(?:ed)?",
            "panic attacks?",
            "insomnia",
            "mood swings",
            "suicidal (?:ideation|thoughts)",
            "irritability",
            "hopeless(?:ness)?",
        ],
    },
    TermGroup {
        name: "lifestyle",
        category: EntityCategory::Lifestyle,
        patterns: &[
            "smok(?:ing|er|es)",
            "alcohol",
            "exercise",
            "diet",
            "sedentary",
            "sleep",
            "caffeine",
            "physical activity",
            "drug use",
        ],
    },
];
