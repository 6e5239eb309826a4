//! Scored risk assessments from a patient's risk factors and medications.

use mentis_core::models::knowledge::MedicationReference;
use mentis_core::models::patient::PatientProfile;
use mentis_core::models::risk::{RiskAssessment, RiskLevel, RiskType, Urgency};

use crate::interactions::check_interactions;
use crate::policy::ScoringPolicy;
use crate::similarity::is_match;

/// Risk factors associated with elevated suicide risk.
pub const SUICIDE_RISK_FACTORS: &[&str] = &[
    "previous attempt",
    "family history",
    "hopelessness",
    "isolation",
    "substance abuse",
    "chronic pain",
    "recent loss",
    "access to means",
    "impulsivity",
    "unemployment",
];

const HIGH_RISK_RECOMMENDATIONS: &[&str] = &[
    "Immediate safety assessment required",
    "Consider emergency psychiatric evaluation",
    "Remove access to lethal means",
    "Establish continuous monitoring until evaluated",
];

const MODERATE_RISK_RECOMMENDATIONS: &[&str] = &[
    "Complete a safety plan within 24 hours",
    "Increase session frequency",
    "Provide crisis hotline information",
];

const LOW_RISK_RECOMMENDATIONS: &[&str] = &[
    "Continue routine monitoring",
    "Reassess risk factors at each visit",
];

const INTERACTION_RECOMMENDATIONS: &[&str] = &[
    "Review medication regimen with prescriber",
    "Monitor for adverse drug effects",
];

/// All risk assessments that apply to `patient`. Empty when nothing applies.
pub fn assess(
    patient: &PatientProfile,
    medications: &[MedicationReference],
    policy: &ScoringPolicy,
) -> Vec<RiskAssessment> {
    let mut assessments = Vec::new();

    if let Some(suicide) = assess_suicide(patient, policy) {
        assessments.push(suicide);
    }
    if let Some(interaction) = assess_interactions(patient, medications, policy) {
        assessments.push(interaction);
    }

    for a in &assessments {
        if a.urgency == Urgency::Immediate {
            tracing::warn!(
                patient_id = %patient.id,
                risk_type = ?a.risk_type,
                score = a.score,
                "immediate risk identified"
            );
        }
    }

    assessments
}

/// Suicide risk from the patient's risk factors, or `None` if none of them
/// match the suicide vocabulary.
pub fn assess_suicide(patient: &PatientProfile, policy: &ScoringPolicy) -> Option<RiskAssessment> {
    let factors: Vec<String> = patient
        .risk_factors
        .iter()
        .filter(|factor| {
            SUICIDE_RISK_FACTORS
                .iter()
                .any(|known| is_match(factor, known, policy.match_threshold))
        })
        .cloned()
        .collect();

    if factors.is_empty() {
        return None;
    }

    let raw = factors.len() as u64 * u64::from(policy.suicide_factor_weight);
    let score = raw.min(u64::from(policy.max_risk_score)) as u8;
    let tier = Tier::of(score, policy);

    tracing::debug!(matched = factors.len(), score, "suicide risk scored");

    Some(RiskAssessment {
        risk_type: RiskType::Suicide,
        risk_level: tier.level(),
        score,
        factors,
        recommendations: tier.recommendations(),
        urgency: tier.urgency(),
    })
}

/// A fixed-shape assessment when the patient's medications interact.
pub fn assess_interactions(
    patient: &PatientProfile,
    medications: &[MedicationReference],
    policy: &ScoringPolicy,
) -> Option<RiskAssessment> {
    let interactions = check_interactions(&patient.current_medications, medications);
    if interactions.is_empty() {
        return None;
    }

    Some(RiskAssessment {
        risk_type: RiskType::MedicationInteraction,
        risk_level: RiskLevel::Moderate,
        score: policy.interaction_risk_score,
        factors: interactions,
        recommendations: to_strings(INTERACTION_RECOMMENDATIONS),
        urgency: Urgency::WithinWeek,
    })
}

/// Score tier shared by level, urgency, and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    High,
    Moderate,
    Low,
}

impl Tier {
    fn of(score: u8, policy: &ScoringPolicy) -> Self {
        if score > policy.high_risk_above {
            Tier::High
        } else if score > policy.moderate_risk_above {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }

    fn level(self) -> RiskLevel {
        match self {
            Tier::High => RiskLevel::High,
            Tier::Moderate => RiskLevel::Moderate,
            Tier::Low => RiskLevel::Low,
        }
    }

    fn urgency(self) -> Urgency {
        match self {
            Tier::High => Urgency::Immediate,
            Tier::Moderate => Urgency::Within24h,
            Tier::Low => Urgency::Routine,
        }
    }

    fn recommendations(self) -> Vec<String> {
        to_strings(match self {
            Tier::High => HIGH_RISK_RECOMMENDATIONS,
            Tier::Moderate => MODERATE_RISK_RECOMMENDATIONS,
            Tier::Low => LOW_RISK_RECOMMENDATIONS,
        })
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
