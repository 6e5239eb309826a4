pub mod diagnoses;
pub mod evaluate;
pub mod health;
pub mod knowledge;
pub mod medications;
pub mod notes;
pub mod risk;
pub mod similarity;
pub mod treatments;

use serde_json::Value;

use mentis_core::error::CoreError;
use mentis_core::models::patient::PatientProfile;
use mentis_core::validate::patient_from_value;

use crate::error::ApiError;

/// Pull and validate the `patient` object out of a request body.
pub(crate) fn take_patient(body: &mut Value) -> Result<PatientProfile, ApiError> {
    let raw = body
        .get_mut("patient")
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::Validation(CoreError::MissingField("patient".to_string())))?;
    Ok(patient_from_value(raw)?)
}
