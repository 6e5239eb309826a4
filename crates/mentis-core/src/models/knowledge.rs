use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A diagnosis entry in the knowledge base, keyed by its DSM-5 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisDefinition {
    pub code: String,
    pub name: String,
    /// Human-readable criteria. Displayed, never evaluated.
    pub criteria: Vec<String>,
    /// Expected symptom keywords, in display order. Must be non-empty and
    /// free of case-insensitive repeats.
    pub symptom_keywords: Vec<String>,
}

/// Differential diagnoses and follow-up assessments for one diagnosis code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisGuidance {
    pub differential_diagnoses: Vec<String>,
    pub recommended_assessments: Vec<String>,
}

/// Strength of the clinical evidence behind a treatment, A (strongest) to D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvidenceLevel {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentDefinition {
    /// Name of the diagnosis this treatment applies to. Matched exactly.
    pub diagnosis_name: String,
    pub treatment: String,
    pub evidence_level: EvidenceLevel,
    /// Expected effectiveness, 0–100.
    pub effectiveness: u8,
    pub side_effects: BTreeSet<String>,
    pub contraindications: BTreeSet<String>,
    pub monitoring: BTreeSet<String>,
}

/// Reference data for one medication, matched by substring against the
/// free-text medication names on a patient profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationReference {
    pub key: String,
    pub display_name: String,
    pub drug_class: String,
    pub known_interactions: BTreeSet<String>,
    pub side_effects: BTreeSet<String>,
    pub contraindications: BTreeSet<String>,
}
