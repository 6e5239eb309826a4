use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::notes::NoteAnalysis;
use super::risk::RiskAssessment;
use super::suggestion::{DiagnosticSuggestion, TreatmentRecommendation};

/// Combined output of one full decision-support pass over a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalReport {
    pub patient_id: String,
    pub diagnostic_suggestions: Vec<DiagnosticSuggestion>,
    /// Treatments for the top suggestion, if there was one.
    pub treatment_recommendations: Vec<TreatmentRecommendation>,
    pub risk_assessments: Vec<RiskAssessment>,
    pub note_analysis: Option<NoteAnalysis>,
}
