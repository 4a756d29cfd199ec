use medinote_analysis::terminology::{confidence_for, extract_entities, term_groups};
use medinote_core::models::entity::{Entity, EntityCategory};

fn find<'a>(entities: &'a [Entity], text: &str, category: EntityCategory) -> Option<&'a Entity> {
    entities
        .iter()
        .find(|e| e.text.eq_ignore_ascii_case(text) && e.category == category)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn detects_symptoms_in_exertional_chest_pain_note() {
    let entities =
        extract_entities("Patient reports severe chest pain and shortness of breath on exertion.");

    let chest = find(&entities, "chest pain", EntityCategory::Symptom).expect("chest pain");
    let sob = find(&entities, "shortness of breath", EntityCategory::Symptom).expect("sob");

    // "Patient" is a context word: 0.7 + 0.1
    assert!(approx(chest.confidence, 0.8));
    assert!(approx(sob.confidence, 0.8));
}

#[test]
fn preserves_original_casing() {
    let entities = extract_entities("Known HYPERTENSION, takes Aspirin daily.");

    let condition = find(&entities, "hypertension", EntityCategory::Condition).unwrap();
    assert_eq!(condition.text, "HYPERTENSION");

    let medication = find(&entities, "aspirin", EntityCategory::Medication).unwrap();
    assert_eq!(medication.text, "Aspirin");
}

#[test]
fn specific_categories_score_higher() {
    // No context words here.
    let entities = extract_entities("Fever treated with ibuprofen.");

    let fever = find(&entities, "fever", EntityCategory::Symptom).unwrap();
    let ibuprofen = find(&entities, "ibuprofen", EntityCategory::Medication).unwrap();
    assert!(approx(fever.confidence, 0.7));
    assert!(approx(ibuprofen.confidence, 0.9));

    assert_eq!(entities[0].text, "ibuprofen");
}

#[test]
fn context_bonus_clamps_at_one() {
    assert!(approx(confidence_for(EntityCategory::Symptom, false), 0.7));
    assert!(approx(confidence_for(EntityCategory::Symptom, true), 0.8));
    assert!(approx(confidence_for(EntityCategory::Condition, false), 0.9));

    assert_eq!(confidence_for(EntityCategory::Medication, true), 1.0);
    assert_eq!(confidence_for(EntityCategory::Condition, true), 1.0);
    assert_eq!(confidence_for(EntityCategory::Lifestyle, true), 0.8);
}

#[test]
fn repeated_terms_are_merged_case_insensitively() {
    let entities = extract_entities("Headache today. headache again. HEADACHE worse.");

    let headaches: Vec<_> = entities
        .iter()
        .filter(|e| e.text.to_lowercase() == "headache" && e.category == EntityCategory::Symptom)
        .collect();
    assert_eq!(headaches.len(), 1);
    assert_eq!(headaches[0].text, "Headache");
}

#[test]
fn overlapping_terms_in_different_categories_coexist() {
    let entities = extract_entities("Chest infection with chest pain on coughing.");

    assert!(find(&entities, "chest infection", EntityCategory::Condition).is_some());
    assert!(find(&entities, "chest pain", EntityCategory::Symptom).is_some());
    assert!(find(&entities, "coughing", EntityCategory::Symptom).is_some());
}

#[test]
fn no_two_entities_share_a_dedup_key() {
    let entities = extract_entities(
        "Patient on insulin. Insulin dose adjusted. Anxiety and anxiety-related insomnia. BP 150/90, bp rechecked.",
    );

    let mut keys: Vec<_> = entities.iter().map(Entity::dedup_key).collect();
    let before = keys.len();
    keys.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.as_str().cmp(b.1.as_str())));
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn results_sorted_by_descending_confidence() {
    let entities = extract_entities(
        "Patient with diabetes on metformin, reports fatigue and smoking history. ECG ordered.",
    );
    assert!(!entities.is_empty());
    assert!(entities.windows(2).all(|w| w[0].confidence >= w[1].confidence));
}

#[test]
fn blood_pressure_reading_is_a_vital() {
    let entities = extract_entities("BP 190/120 on arrival.");
    assert!(find(&entities, "BP", EntityCategory::Vital).is_some());
    assert!(find(&entities, "190/120", EntityCategory::Vital).is_some());
}

#[test]
fn partial_words_do_not_match() {
    // "diet" must not fire inside "dietitian", nor "rash" inside "brash".
    let entities = extract_entities("Seen by the dietitian; brash manner.");
    assert!(entities.is_empty());
}

#[test]
fn blank_input_yields_nothing() {
    assert!(extract_entities("").is_empty());
    assert!(extract_entities("   \n\t").is_empty());
    assert!(extract_entities("The weather was nice today.").is_empty());
}

#[test]
fn every_category_has_a_term_group() {
    for category in EntityCategory::ALL {
        assert!(
            term_groups().iter().any(|g| g.category == category),
            "no term group for {category}"
        );
    }
}
