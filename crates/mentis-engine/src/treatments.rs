//! Per-patient treatment filtering and ranking.

use mentis_core::models::knowledge::TreatmentDefinition;
use mentis_core::models::patient::PatientProfile;
use mentis_core::models::suggestion::TreatmentRecommendation;

use crate::matching::contraindication_applies;

/// Treatments for `diagnosis_name` that are safe for this patient, most
/// effective first.
///
/// An unknown diagnosis yields an empty list.
pub fn recommend(
    diagnosis_name: &str,
    patient: &PatientProfile,
    treatments: &[TreatmentDefinition],
) -> Vec<TreatmentRecommendation> {
    let mut recommendations: Vec<TreatmentRecommendation> = treatments
        .iter()
        .filter(|def| def.diagnosis_name == diagnosis_name)
        .filter(|def| {
            let excluded = is_contraindicated(def, patient);
            if excluded {
                tracing::debug!(treatment = %def.treatment, "excluded by contraindication");
            }
            !excluded
        })
        .map(TreatmentRecommendation::from)
        .collect();

    recommendations.sort_by(|a, b| b.effectiveness.cmp(&a.effectiveness));
    recommendations
}

/// Whether any contraindication of `def` applies to a current medication or
/// a history entry.
pub fn is_contraindicated(def: &TreatmentDefinition, patient: &PatientProfile) -> bool {
    def.contraindications.iter().any(|contra| {
        patient
            .current_medications
            .iter()
            .chain(patient.medical_history.iter())
            .any(|entry| contraindication_applies(contra, entry))
    })
}
