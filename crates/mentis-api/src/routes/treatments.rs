use axum::extract::State;
use axum::Json;
use serde_json::Value;

use mentis_core::error::CoreError;
use mentis_core::models::suggestion::TreatmentRecommendation;

use crate::error::ApiError;
use crate::state::AppState;

use super::take_patient;

/// Body: `{ "diagnosis": string, "patient": PatientProfile }`.
pub async fn recommend_treatments(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<Vec<TreatmentRecommendation>>, ApiError> {
    let diagnosis = body
        .get("diagnosis")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation(CoreError::MissingField("diagnosis".to_string())))?
        .to_string();
    let patient = take_patient(&mut body)?;

    Ok(Json(state.engine().recommend(&diagnosis, &patient)))
}
