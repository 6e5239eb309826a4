mod common;

use mentis_core::models::risk::{RiskLevel, RiskType, Urgency};
use mentis_engine::risk::{assess, assess_suicide};
use mentis_engine::{KnowledgeBase, ScoringPolicy};

use common::{patient_with_medications, patient_with_risk_factors};

#[test]
fn two_factors_are_moderate_within_24h() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_risk_factors(&["hopelessness", "isolation"]);

    let assessments = assess(&patient, &kb.medications, &ScoringPolicy::default());

    assert_eq!(assessments.len(), 1);
    let suicide = &assessments[0];
    assert_eq!(suicide.risk_type, RiskType::Suicide);
    assert_eq!(suicide.score, 40);
    assert_eq!(suicide.risk_level, RiskLevel::Moderate);
    assert_eq!(suicide.urgency, Urgency::Within24h);
    assert_eq!(suicide.factors, ["hopelessness", "isolation"]);
    assert!(suicide
        .recommendations
        .contains(&"Complete a safety plan within 24 hours".to_string()));
}

#[test]
fn one_factor_is_low_and_routine() {
    let patient = patient_with_risk_factors(&["chronic pain"]);

    let suicide = assess_suicide(&patient, &ScoringPolicy::default()).unwrap();

    assert_eq!(suicide.score, 20);
    assert_eq!(suicide.risk_level, RiskLevel::Low);
    assert_eq!(suicide.urgency, Urgency::Routine);
    assert_eq!(suicide.recommendations[0], "Continue routine monitoring");
}

#[test]
fn tier_boundaries_are_exclusive() {
    // 3 factors = 60, which is not above the high boundary.
    let patient = patient_with_risk_factors(&["hopelessness", "isolation", "recent loss"]);
    let suicide = assess_suicide(&patient, &ScoringPolicy::default()).unwrap();
    assert_eq!(suicide.score, 60);
    assert_eq!(suicide.risk_level, RiskLevel::Moderate);
    assert_eq!(suicide.urgency, Urgency::Within24h);
}

#[test]
fn four_factors_are_high_and_immediate() {
    let patient = patient_with_risk_factors(&[
        "hopelessness",
        "isolation",
        "recent loss",
        "previous attempt",
    ]);

    let suicide = assess_suicide(&patient, &ScoringPolicy::default()).unwrap();

    assert_eq!(suicide.score, 80);
    assert_eq!(suicide.risk_level, RiskLevel::High);
    assert_eq!(suicide.urgency, Urgency::Immediate);
    assert_eq!(suicide.recommendations[0], "Immediate safety assessment required");
}

#[test]
fn score_is_capped_at_one_hundred() {
    let patient = patient_with_risk_factors(&[
        "hopelessness",
        "isolation",
        "recent loss",
        "previous attempt",
        "family history",
        "substance abuse",
    ]);

    let suicide = assess_suicide(&patient, &ScoringPolicy::default()).unwrap();
    assert_eq!(suicide.score, 100);
}

#[test]
fn misspelled_factor_still_counts() {
    let patient = patient_with_risk_factors(&["hopelesness"]);

    let suicide = assess_suicide(&patient, &ScoringPolicy::default()).unwrap();
    assert_eq!(suicide.factors, ["hopelesness"]);
}

#[test]
fn unrelated_factors_are_ignored() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_risk_factors(&[
        "good social support",
        "stable housing",
        "regular exercise",
    ]);

    assert!(assess(&patient, &kb.medications, &ScoringPolicy::default()).is_empty());
}

#[test]
fn no_factors_and_no_interactions_is_empty() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_risk_factors(&[]);

    assert!(assess(&patient, &kb.medications, &ScoringPolicy::default()).is_empty());
}

#[test]
fn interacting_medications_add_fixed_assessment() {
    let kb = KnowledgeBase::reference();
    let patient = patient_with_medications(&["sertraline", "tramadol"]);

    let assessments = assess(&patient, &kb.medications, &ScoringPolicy::default());

    assert_eq!(assessments.len(), 1);
    let interaction = &assessments[0];
    assert_eq!(interaction.risk_type, RiskType::MedicationInteraction);
    assert_eq!(interaction.risk_level, RiskLevel::Moderate);
    assert_eq!(interaction.score, 50);
    assert_eq!(interaction.urgency, Urgency::WithinWeek);
    assert_eq!(interaction.factors, ["sertraline + tramadol: Potential interaction"]);
}

#[test]
fn suicide_assessment_comes_before_interaction_assessment() {
    let kb = KnowledgeBase::reference();
    let mut patient = patient_with_medications(&["lithium", "ibuprofen"]);
    patient.risk_factors.insert("isolation".to_string());

    let assessments = assess(&patient, &kb.medications, &ScoringPolicy::default());

    let types: Vec<_> = assessments.iter().map(|a| a.risk_type).collect();
    assert_eq!(types, [RiskType::Suicide, RiskType::MedicationInteraction]);
}

#[test]
fn policy_weights_change_scores() {
    let patient = patient_with_risk_factors(&["hopelessness"]);
    let policy = ScoringPolicy {
        suicide_factor_weight: 35,
        ..ScoringPolicy::default()
    };

    let suicide = assess_suicide(&patient, &policy).unwrap();
    assert_eq!(suicide.score, 35);
    assert_eq!(suicide.risk_level, RiskLevel::Moderate);
}
