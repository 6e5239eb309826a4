use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::knowledge::{EvidenceLevel, TreatmentDefinition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticSuggestion {
    pub diagnosis: String,
    /// Share of the diagnosis' keywords that matched, 0–95.
    pub confidence: u8,
    pub dsm_code: String,
    pub criteria: Vec<String>,
    pub differential_diagnoses: Vec<String>,
    pub recommended_assessments: Vec<String>,
}

/// A treatment that survived contraindication filtering for one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentRecommendation {
    pub treatment: String,
    pub evidence_level: EvidenceLevel,
    pub effectiveness: u8,
    pub side_effects: BTreeSet<String>,
    pub contraindications: BTreeSet<String>,
    pub monitoring: BTreeSet<String>,
}

impl From<&TreatmentDefinition> for TreatmentRecommendation {
    fn from(def: &TreatmentDefinition) -> Self {
        Self {
            treatment: def.treatment.clone(),
            evidence_level: def.evidence_level,
            effectiveness: def.effectiveness,
            side_effects: def.side_effects.clone(),
            contraindications: def.contraindications.clone(),
            monitoring: def.monitoring.clone(),
        }
    }
}
