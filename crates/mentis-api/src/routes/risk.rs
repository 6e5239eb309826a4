use axum::extract::State;
use axum::Json;
use serde_json::Value;

use mentis_core::models::risk::RiskAssessment;

use crate::error::ApiError;
use crate::state::AppState;

use super::take_patient;

/// Body: `{ "patient": PatientProfile }`.
pub async fn assess_risk(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<Vec<RiskAssessment>>, ApiError> {
    let patient = take_patient(&mut body)?;
    Ok(Json(state.engine().assess(&patient)))
}
