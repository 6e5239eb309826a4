use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use mentis_core::models::suggestion::DiagnosticSuggestion;

use crate::error::ApiError;
use crate::state::AppState;

use super::take_patient;

#[derive(Serialize)]
pub struct DiagnosisSummary {
    code: String,
    name: String,
    keyword_count: usize,
}

/// Diagnoses in the active knowledge base.
pub async fn list_diagnoses(State(state): State<AppState>) -> Json<Vec<DiagnosisSummary>> {
    let kb = state.store.snapshot();
    let summaries = kb
        .diagnoses
        .iter()
        .map(|d| DiagnosisSummary {
            code: d.code.clone(),
            name: d.name.clone(),
            keyword_count: d.symptom_keywords.len(),
        })
        .collect();
    Json(summaries)
}

/// Body: `{ "patient": PatientProfile }`.
pub async fn suggest_diagnoses(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<Vec<DiagnosticSuggestion>>, ApiError> {
    let patient = take_patient(&mut body)?;
    Ok(Json(state.engine().suggest(&patient)))
}
