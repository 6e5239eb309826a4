use axum::extract::State;
use axum::Json;
use serde_json::Value;

use mentis_core::models::report::ClinicalReport;

use crate::error::ApiError;
use crate::state::AppState;

use super::take_patient;

/// Full decision-support pass.
///
/// Body: `{ "patient": PatientProfile, "notes": string | null }`.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<ClinicalReport>, ApiError> {
    let notes = match body.get("notes") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(ApiError::BadRequest("notes must be a string".to_string())),
    };
    let patient = take_patient(&mut body)?;

    let report = state.engine().evaluate(&patient, notes.as_deref());
    tracing::info!(
        patient_id = %report.patient_id,
        suggestions = report.diagnostic_suggestions.len(),
        risk_assessments = report.risk_assessments.len(),
        "evaluation complete"
    );
    Ok(Json(report))
}
