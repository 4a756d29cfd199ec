use medinote_analysis::error::AnalysisError;
use medinote_analysis::{analyze, analyze_bytes, analyze_value};
use medinote_core::models::analysis::AnalysisResult;
use medinote_core::models::entity::EntityCategory;
use medinote_core::models::sentiment::SentimentEstimate;
use serde_json::json;

const EXERTIONAL: &str = "Patient reports severe chest pain and shortness of breath on exertion.";
const FOLLOW_UP: &str = "Routine follow-up, patient stable, blood pressure normal, no new complaints.";
const CRISIS: &str = "BP 190/120, patient appears critical and unresponsive.";
const SMALL_TALK: &str = "The weather was nice today.";

const NOTES: &[&str] = &[
    EXERTIONAL,
    FOLLOW_UP,
    CRISIS,
    SMALL_TALK,
    "Patient has migraine and reports anxiety. Takes sumatriptan. Sleep poor, stress at work.",
    "Cough and fever for three days. Chest X-ray ordered. Amoxicillin started. Fever fever fever.",
    "Known diabetes, on metformin and insulin. HbA1c elevated. Diet and exercise counselling.",
];

fn has_entity(result: &AnalysisResult, text: &str, category: EntityCategory) -> bool {
    result
        .entities
        .iter()
        .any(|e| e.text.eq_ignore_ascii_case(text) && e.category == category)
}

#[test]
fn empty_inputs_return_canonical_empty_result() {
    for result in [
        analyze(None::<&str>),
        analyze(""),
        analyze("   "),
        analyze("\n\t  \r\n"),
    ] {
        assert_eq!(result, AnalysisResult::empty());
        assert_eq!(result.severity.value(), 5);
        assert_eq!(result.sentiment, SentimentEstimate::NEUTRAL);
    }
}

#[test]
fn exertional_chest_pain() {
    let result = analyze(EXERTIONAL);

    assert!(has_entity(&result, "chest pain", EntityCategory::Symptom));
    assert!(has_entity(&result, "shortness of breath", EntityCategory::Symptom));
    assert!(result.suggested_diagnoses.contains(&"Coronary Artery Disease".to_string()));
    assert!(result.severity.value() >= 7);
    assert!(result.sentiment.is_concerning());
    assert_eq!(
        result.key_phrases,
        vec!["Patient reports severe chest pain and shortness of breath on exertion"]
    );
}

#[test]
fn routine_follow_up() {
    let result = analyze(FOLLOW_UP);

    assert!(result.sentiment.polarity > 0.0);
    assert!(result.severity.value() <= 4);
    assert!(result.suggested_diagnoses.is_empty());
    assert!(has_entity(&result, "blood pressure", EntityCategory::Vital));
}

#[test]
fn critical_patient_with_crisis_pressure() {
    let result = analyze(CRISIS);

    // critical words floor at 8, systolic 190 > 180 floors at 9
    assert_eq!(result.severity.value(), 9);
    assert!(result.suggested_diagnoses.contains(&"Hypertension".to_string()));
    assert!(has_entity(&result, "190/120", EntityCategory::Vital));
}

#[test]
fn no_medical_vocabulary() {
    let result = analyze(SMALL_TALK);

    assert!(result.entities.is_empty());
    assert!(result.suggested_diagnoses.is_empty());
    assert!(result.key_phrases.is_empty());
    assert_eq!(result.severity.value(), 5);
    assert_eq!(result.sentiment, SentimentEstimate { polarity: 0.0, magnitude: 0.0 });
}

#[test]
fn migraine_and_anxiety_both_suggested() {
    let result = analyze(NOTES[4]);
    assert_eq!(result.suggested_diagnoses, vec!["Migraine", "Anxiety Disorder"]);
}

#[test]
fn deterministic() {
    for note in NOTES {
        assert_eq!(analyze(*note), analyze(*note));
    }
}

#[test]
fn invariants_hold_for_every_note() {
    for note in NOTES {
        let result = analyze(*note);

        let mut keys: Vec<_> = result
            .entities
            .iter()
            .map(|e| format!("{}|{}", e.text.to_lowercase(), e.category))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate entity in {note:?}");

        assert!(result.entities.iter().all(|e| (0.0..=1.0).contains(&e.confidence)));
        assert!((1..=10).contains(&result.severity.value()));
        assert!(result.key_phrases.len() <= 3);
        assert!((-1.0..=1.0).contains(&result.sentiment.polarity));
        assert!((0.0..=1.0).contains(&result.sentiment.magnitude));
    }
}

#[test]
fn long_input_stays_bounded() {
    let note = EXERTIONAL.repeat(500);
    let result = analyze(note.as_str());
    assert!(result.key_phrases.len() <= 3);
    assert!((1..=10).contains(&result.severity.value()));
    assert!((result.sentiment.magnitude - 1.0).abs() < 1e-9);
}

#[test]
fn concurrent_calls_agree() {
    let expected: Vec<_> = NOTES.iter().map(|n| analyze(*n)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| NOTES.iter().map(|n| analyze(*n)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let bytes = b"Patient reports \xFF\xFE chest pain.";
    let result = analyze_bytes(bytes);
    assert!(has_entity(&result, "chest pain", EntityCategory::Symptom));
    assert_eq!(analyze_bytes(b"   "), AnalysisResult::empty());
}

#[test]
fn json_strings_and_null_are_accepted() {
    let result = analyze_value(&json!(CRISIS)).unwrap();
    assert_eq!(result, analyze(CRISIS));

    assert_eq!(analyze_value(&json!(null)).unwrap(), AnalysisResult::empty());
}

#[test]
fn other_json_types_fail_fast() {
    for (value, expected) in [
        (json!(42), "number"),
        (json!(true), "boolean"),
        (json!(["chest pain"]), "array"),
        (json!({"text": "chest pain"}), "object"),
    ] {
        match analyze_value(&value) {
            Err(AnalysisError::InvalidInput { found }) => assert_eq!(found, expected),
            other => panic!("expected InvalidInput for {value}, got {other:?}"),
        }
    }
}

#[test]
fn serializes_with_dashboard_field_names() {
    let value = serde_json::to_value(analyze(EXERTIONAL)).unwrap();

    assert!(value.get("keyPhrases").is_some());
    assert!(value.get("suggestedDiagnoses").is_some());
    assert_eq!(value["severity"], json!(8));
    assert_eq!(value["entities"][0]["category"], json!("symptom"));
}
