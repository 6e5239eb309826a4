//! Boundary validation for patient profiles arriving as JSON.
//!
//! Shape violations fail fast here, naming the offending field, before any
//! engine component runs. Only `symptoms` and each symptom's `name` are required;
//! everything else defaults to empty. An empty list is a valid input, a
//! missing one is not.

use serde_json::Value;

use crate::error::CoreError;
use crate::models::patient::PatientProfile;
use crate::models::symptom::ClinicalSymptom;

/// Parse and validate a patient profile from a JSON string.
pub fn patient_from_json(json: &str) -> Result<PatientProfile, CoreError> {
    let value: Value = serde_json::from_str(json)?;
    patient_from_value(value)
}

/// Validate a raw JSON value and deserialize it into a [`PatientProfile`].
pub fn patient_from_value(mut value: Value) -> Result<PatientProfile, CoreError> {
    let obj = value.as_object_mut().ok_or_else(|| CoreError::InvalidField {
        field: "patient".to_string(),
        reason: "expected a JSON object".to_string(),
    })?;

    for field in PatientProfile::REQUIRED_FIELDS {
        match obj.get(field) {
            None | Some(Value::Null) => return Err(CoreError::MissingField(field.to_string())),
            Some(_) => {}
        }
    }

    if let Some(symptoms) = obj.get("symptoms").and_then(Value::as_array) {
        for (i, symptom) in symptoms.iter().enumerate() {
            if symptom.get("name").and_then(Value::as_str).is_none() {
                return Err(CoreError::MissingField(format!("symptoms[{i}].name")));
            }
        }
    }

    // Identifiers are opaque; numeric ids are kept as their decimal text.
    if let Some(Value::Number(n)) = obj.get("id") {
        let id = n.to_string();
        obj.insert("id".to_string(), Value::String(id));
    }

    let patient: PatientProfile = serde_json::from_value(value)?;
    validate_patient(&patient)?;
    Ok(patient)
}

/// Range checks that serde cannot express.
pub fn validate_patient(patient: &PatientProfile) -> Result<(), CoreError> {
    for (i, symptom) in patient.symptoms.iter().enumerate() {
        validate_symptom(symptom).map_err(|reason| CoreError::InvalidField {
            field: format!("symptoms[{i}]"),
            reason,
        })?;
    }
    Ok(())
}

fn validate_symptom(symptom: &ClinicalSymptom) -> Result<(), String> {
    if symptom.name.trim().is_empty() {
        return Err("symptom name is empty".to_string());
    }
    let Some(severity) = symptom.severity else {
        return Ok(());
    };
    if !(ClinicalSymptom::MIN_SEVERITY..=ClinicalSymptom::MAX_SEVERITY).contains(&severity) {
        return Err(format!(
            "severity {severity} is outside range [{}, {}]",
            ClinicalSymptom::MIN_SEVERITY,
            ClinicalSymptom::MAX_SEVERITY,
        ));
    }
    Ok(())
}
