mod common;

use std::collections::BTreeSet;

use mentis_core::models::knowledge::{EvidenceLevel, TreatmentDefinition};
use mentis_engine::knowledge::reference::{GENERALIZED_ANXIETY_DISORDER, MAJOR_DEPRESSIVE_DISORDER};
use mentis_engine::matching::contraindication_applies;
use mentis_engine::treatments::{is_contraindicated, recommend};
use mentis_engine::KnowledgeBase;

use common::{patient_with_medications, patient_with_symptoms};

fn names(recs: &[mentis_core::models::suggestion::TreatmentRecommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.treatment.as_str()).collect()
}

#[test]
fn maoi_patient_never_receives_maoi_contraindicated_treatment() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_medications(&["MAOI"]);

    let recs = recommend(MAJOR_DEPRESSIVE_DISORDER, &patient, &kb.treatments);

    assert_eq!(
        names(&recs),
        [
            "Cognitive Behavioral Therapy (CBT)",
            "Electroconvulsive Therapy (ECT)",
            "Interpersonal Therapy (IPT)",
        ]
    );
    assert!(recs.iter().all(|r| !r.contraindications.contains("MAOI use")));
}

#[test]
fn history_entries_also_exclude() {
    let kb = KnowledgeBase::reference();
    let mut patient = patient_with_symptoms(&[]);
    patient.medical_history.insert("Seizure disorder (childhood)".to_string());

    let recs = recommend(MAJOR_DEPRESSIVE_DISORDER, &patient, &kb.treatments);

    assert!(!names(&recs).contains(&"Bupropion"));
    assert!(names(&recs).contains(&"Selective Serotonin Reuptake Inhibitors (SSRIs)"));
}

#[test]
fn matching_ignores_case() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_medications(&["maoi USE"]);

    let recs = recommend(GENERALIZED_ANXIETY_DISORDER, &patient, &kb.treatments);

    assert!(!names(&recs).contains(&"Buspirone"));
    assert!(!names(&recs).contains(&"Selective Serotonin Reuptake Inhibitors (SSRIs)"));
}

#[test]
fn unfiltered_list_is_sorted_by_effectiveness_with_stable_ties() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_symptoms(&[]);

    let recs = recommend(GENERALIZED_ANXIETY_DISORDER, &patient, &kb.treatments);

    let effectiveness: Vec<u8> = recs.iter().map(|r| r.effectiveness).collect();
    assert_eq!(effectiveness, [80, 75, 73, 70, 65, 60, 60]);
    assert_eq!(recs[5].treatment, "Mindfulness-Based Stress Reduction");
    assert_eq!(recs[6].treatment, "Applied Relaxation");
}

#[test]
fn unknown_diagnosis_yields_empty_list() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_symptoms(&[]);

    assert!(recommend("Not A Diagnosis", &patient, &kb.treatments).is_empty());
}

#[test]
fn diagnosis_name_must_match_exactly() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_symptoms(&[]);

    assert!(recommend("major depressive disorder", &patient, &kb.treatments).is_empty());
}

#[test]
fn recommendation_carries_definition_fields() {
    let def = TreatmentDefinition {
        diagnosis_name: "Test Disorder".to_string(),
        treatment: "Test Therapy".to_string(),
        evidence_level: EvidenceLevel::C,
        effectiveness: 42,
        side_effects: BTreeSet::from(["Drowsiness".to_string()]),
        contraindications: BTreeSet::from(["Pregnancy".to_string()]),
        monitoring: BTreeSet::from(["Weekly check-in".to_string()]),
    };
    let patient = patient_with_symptoms(&[]);

    let recs = recommend("Test Disorder", &patient, std::slice::from_ref(&def));

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].evidence_level, EvidenceLevel::C);
    assert_eq!(recs[0].effectiveness, 42);
    assert_eq!(recs[0].side_effects, def.side_effects);
    assert_eq!(recs[0].monitoring, def.monitoring);
    assert!(!is_contraindicated(&def, &patient));
}

#[test]
fn contraindication_policy_matches_in_either_direction() {
    assert!(contraindication_applies("MAOI use", "MAOI"));
    assert!(contraindication_applies("MAOI", "Phenelzine (MAOI)"));
    assert!(!contraindication_applies("Pregnancy", "Lisinopril"));
    assert!(!contraindication_applies("MAOI use", ""));
    assert!(!contraindication_applies("", "Sertraline"));
}
