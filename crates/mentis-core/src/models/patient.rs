use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::symptom::ClinicalSymptom;

/// Everything the engine knows about a patient for one invocation.
///
/// Built fresh by the caller from its own record store; the engine only
/// ever borrows it. Set-valued fields are ordered so that any output derived
/// from them is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    /// Caller-assigned identifier, echoed back on reports. Opaque to the engine.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub medical_history: BTreeSet<String>,
    /// Free-text medication names in the order they were recorded.
    #[serde(default)]
    pub current_medications: Vec<String>,
    pub symptoms: Vec<ClinicalSymptom>,
    #[serde(default)]
    pub risk_factors: BTreeSet<String>,
    #[serde(default)]
    pub previous_diagnoses: BTreeSet<String>,
}

impl PatientProfile {
    /// Field names that must be present in a serialized profile. Everything
    /// else defaults to empty.
    pub const REQUIRED_FIELDS: [&'static str; 1] = ["symptoms"];
}
