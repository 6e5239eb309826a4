use std::sync::Arc;

use mentis_core::models::notes::NoteAnalysis;
use mentis_core::models::patient::PatientProfile;
use mentis_core::models::report::ClinicalReport;
use mentis_core::models::risk::RiskAssessment;
use mentis_core::models::suggestion::{DiagnosticSuggestion, TreatmentRecommendation};

use crate::knowledge::KnowledgeBase;
use crate::policy::ScoringPolicy;
use crate::{diagnostics, interactions, notes, risk, similarity, treatments};

/// An immutable bundle of a knowledge-base snapshot and a scoring policy.
///
/// Cheap to clone and safe to share across threads. Every method is a pure
/// function of its arguments and the bundled tables.
#[derive(Debug, Clone)]
pub struct ClinicalDecisionSupport {
    knowledge: Arc<KnowledgeBase>,
    policy: ScoringPolicy,
}

impl ClinicalDecisionSupport {
    pub fn new(knowledge: Arc<KnowledgeBase>, policy: ScoringPolicy) -> Self {
        Self { knowledge, policy }
    }

    /// Reference knowledge base with the default policy.
    pub fn reference() -> Self {
        Self::new(Arc::new(KnowledgeBase::reference()), ScoringPolicy::default())
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity::similarity(a, b)
    }

    pub fn suggest(&self, patient: &PatientProfile) -> Vec<DiagnosticSuggestion> {
        diagnostics::suggest(patient, &self.knowledge.diagnoses, &self.policy)
    }

    pub fn recommend(
        &self,
        diagnosis_name: &str,
        patient: &PatientProfile,
    ) -> Vec<TreatmentRecommendation> {
        treatments::recommend(diagnosis_name, patient, &self.knowledge.treatments)
    }

    pub fn check_interactions(&self, medications: &[String]) -> Vec<String> {
        interactions::check_interactions(medications, &self.knowledge.medications)
    }

    pub fn assess(&self, patient: &PatientProfile) -> Vec<RiskAssessment> {
        risk::assess(patient, &self.knowledge.medications, &self.policy)
    }

    pub fn analyze_notes(&self, notes: &str) -> NoteAnalysis {
        notes::analyze(notes, &self.policy)
    }

    /// Full pass: diagnostics, treatments for the top suggestion, risk, and
    /// (when given) note analysis.
    pub fn evaluate(&self, patient: &PatientProfile, notes: Option<&str>) -> ClinicalReport {
        let diagnostic_suggestions = self.suggest(patient);
        let treatment_recommendations = diagnostic_suggestions
            .first()
            .map(|top| self.recommend(&top.diagnosis, patient))
            .unwrap_or_default();

        ClinicalReport {
            patient_id: patient.id.clone(),
            diagnostic_suggestions,
            treatment_recommendations,
            risk_assessments: self.assess(patient),
            note_analysis: notes.map(|n| self.analyze_notes(n)),
        }
    }
}
