//! Ranked diagnostic suggestions from a patient's symptom list.

use mentis_core::models::knowledge::DiagnosisDefinition;
use mentis_core::models::patient::PatientProfile;
use mentis_core::models::suggestion::DiagnosticSuggestion;

use crate::knowledge::DiagnosisCatalog;
use crate::policy::ScoringPolicy;
use crate::similarity::is_match;

/// Suggest diagnoses whose keywords the patient's symptoms fuzzily match.
///
/// A diagnosis is suggested once at least `policy.min_keyword_matches` of its
/// keywords match some symptom. Results are sorted by confidence, highest
/// first; equal confidences keep catalog order.
pub fn suggest(
    patient: &PatientProfile,
    catalog: &DiagnosisCatalog,
    policy: &ScoringPolicy,
) -> Vec<DiagnosticSuggestion> {
    let mut suggestions: Vec<DiagnosticSuggestion> = catalog
        .iter()
        .filter_map(|def| {
            let matched = matching_keywords(patient, def, policy.match_threshold);
            if matched.len() < policy.min_keyword_matches {
                return None;
            }

            let confidence = confidence(matched.len(), def.symptom_keywords.len(), policy);
            tracing::debug!(
                code = %def.code,
                matched = matched.len(),
                keywords = def.symptom_keywords.len(),
                confidence,
                "diagnosis matched"
            );

            let guidance = catalog.guidance(&def.code).cloned().unwrap_or_default();
            Some(DiagnosticSuggestion {
                diagnosis: def.name.clone(),
                confidence,
                dsm_code: def.code.clone(),
                criteria: def.criteria.clone(),
                differential_diagnoses: guidance.differential_diagnoses,
                recommended_assessments: guidance.recommended_assessments,
            })
        })
        .collect();

    // Stable sort keeps catalog order for ties.
    suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    suggestions
}

/// Keywords of `def` that at least one of the patient's symptoms matches.
pub fn matching_keywords<'a>(
    patient: &PatientProfile,
    def: &'a DiagnosisDefinition,
    threshold: f64,
) -> Vec<&'a str> {
    def.symptom_keywords
        .iter()
        .filter(|kw| patient.symptoms.iter().any(|s| is_match(&s.name, kw, threshold)))
        .map(String::as_str)
        .collect()
}

fn confidence(matched: usize, total: usize, policy: &ScoringPolicy) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (matched as f64 / total as f64 * 100.0).round();
    pct.min(f64::from(policy.max_confidence)) as u8
}
