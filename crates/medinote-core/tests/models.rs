use medinote_core::error::CoreError;
use medinote_core::models::analysis::AnalysisResult;
use medinote_core::models::entity::{Entity, EntityCategory};
use medinote_core::models::severity::Severity;

#[test]
fn severity_rejects_out_of_range_values() {
    assert!(matches!(Severity::new(0), Err(CoreError::SeverityOutOfRange(0))));
    assert!(matches!(Severity::new(11), Err(CoreError::SeverityOutOfRange(11))));
    assert_eq!(Severity::new(7).unwrap().value(), 7);
}

#[test]
fn severity_clamps_scores() {
    assert_eq!(Severity::clamped(-3), Severity::MIN);
    assert_eq!(Severity::clamped(42), Severity::MAX);
    assert_eq!(Severity::clamped(6).value(), 6);
}

#[test]
fn severity_deserialization_validates_range() {
    let ok: Severity = serde_json::from_str("8").unwrap();
    assert_eq!(ok.value(), 8);
    assert!(serde_json::from_str::<Severity>("0").is_err());
    assert!(serde_json::from_str::<Severity>("12").is_err());
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("Medication".parse::<EntityCategory>().unwrap(), EntityCategory::Medication);
    assert_eq!(" vital ".parse::<EntityCategory>().unwrap(), EntityCategory::Vital);
    assert!(matches!(
        "allergy".parse::<EntityCategory>(),
        Err(CoreError::UnknownCategory(_))
    ));
}

#[test]
fn only_conditions_and_medications_are_specific() {
    let specific: Vec<_> = EntityCategory::ALL
        .into_iter()
        .filter(EntityCategory::is_specific)
        .collect();
    assert_eq!(specific, vec![EntityCategory::Condition, EntityCategory::Medication]);
}

#[test]
fn dedup_key_ignores_case() {
    let a = Entity {
        text: "Chest Pain".to_string(),
        category: EntityCategory::Symptom,
        confidence: 0.8,
    };
    let b = Entity {
        text: "chest pain".to_string(),
        category: EntityCategory::Symptom,
        confidence: 0.7,
    };
    assert_eq!(a.dedup_key(), b.dedup_key());
}

#[test]
fn empty_result_has_baseline_severity() {
    let empty = AnalysisResult::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.severity, Severity::BASELINE);
    assert_eq!(empty.severity.value(), 5);
}

#[test]
fn result_uses_camel_case_fields() {
    let json = serde_json::to_string(&AnalysisResult::empty()).unwrap();
    assert_eq!(
        json,
        r#"{"entities":[],"sentiment":{"polarity":0.0,"magnitude":0.0},"keyPhrases":[],"suggestedDiagnoses":[],"severity":5}"#
    );
}
