use mentis_core::error::CoreError;
use mentis_core::models::symptom::{Frequency, Impact};
use mentis_core::validate::{patient_from_json, patient_from_value};
use serde_json::json;

fn base_patient() -> serde_json::Value {
    json!({
        "id": "5f0c6f1e-3b7a-4c1e-9a65-0d5a4f3b2c11",
        "age": 34,
        "gender": "female",
        "symptoms": [
            {
                "name": "worry",
                "severity": 6,
                "duration_days": 200,
                "frequency": "daily",
                "impact": "moderate"
            }
        ]
    })
}

#[test]
fn valid_profile_parses_with_optional_fields_defaulted() {
    let patient = patient_from_value(base_patient()).unwrap();
    assert_eq!(patient.id, "5f0c6f1e-3b7a-4c1e-9a65-0d5a4f3b2c11");
    assert_eq!(patient.age, Some(34));
    assert_eq!(patient.symptoms.len(), 1);
    assert_eq!(patient.symptoms[0].severity, Some(6));
    assert_eq!(patient.symptoms[0].frequency, Some(Frequency::Daily));
    assert_eq!(patient.symptoms[0].impact, Some(Impact::Moderate));
    assert!(patient.current_medications.is_empty());
    assert!(patient.medical_history.is_empty());
    assert!(patient.risk_factors.is_empty());
}

#[test]
fn missing_symptoms_names_the_field() {
    let mut value = base_patient();
    value.as_object_mut().unwrap().remove("symptoms");

    match patient_from_value(value) {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "symptoms"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn null_symptoms_is_treated_as_missing() {
    let mut value = base_patient();
    value["symptoms"] = serde_json::Value::Null;

    let err = patient_from_value(value).unwrap_err();
    assert_eq!(err.to_string(), "missing required field: symptoms");
}

#[test]
fn empty_symptoms_is_valid() {
    let mut value = base_patient();
    value["symptoms"] = json!([]);

    let patient = patient_from_value(value).unwrap();
    assert!(patient.symptoms.is_empty());
}

#[test]
fn symptom_without_name_is_rejected() {
    let mut value = base_patient();
    value["symptoms"][0].as_object_mut().unwrap().remove("name");

    match patient_from_value(value) {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "symptoms[0].name"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn severity_out_of_range_is_rejected() {
    let mut value = base_patient();
    value["symptoms"][0]["severity"] = json!(11);

    match patient_from_value(value) {
        Err(CoreError::InvalidField { field, reason }) => {
            assert_eq!(field, "symptoms[0]");
            assert!(reason.contains("severity 11"));
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn symptoms_alone_are_enough() {
    let patient = patient_from_json(
        r#"{
            "symptoms": [{"name": "anxiety"}, {"name": "worry"}, {"name": "tension"}, {"name": "irritability"}],
            "current_medications": [],
            "medical_history": []
        }"#,
    )
    .unwrap();

    assert_eq!(patient.id, "");
    assert_eq!(patient.age, None);
    assert_eq!(patient.symptoms.len(), 4);
    assert_eq!(patient.symptoms[0].name, "anxiety");
    assert_eq!(patient.symptoms[0].severity, None);
    assert_eq!(patient.symptoms[0].duration_days, None);
    assert_eq!(patient.symptoms[0].frequency, None);
    assert_eq!(patient.symptoms[0].impact, None);
}

#[test]
fn identifiers_are_opaque() {
    let mut value = base_patient();
    value["id"] = json!("p-123");
    assert_eq!(patient_from_value(value).unwrap().id, "p-123");

    let mut value = base_patient();
    value["id"] = json!(42);
    assert_eq!(patient_from_value(value).unwrap().id, "42");
}

#[test]
fn null_optional_attributes_default() {
    let mut value = base_patient();
    value["age"] = serde_json::Value::Null;
    value["symptoms"][0]["severity"] = serde_json::Value::Null;

    let patient = patient_from_value(value).unwrap();
    assert_eq!(patient.age, None);
    assert_eq!(patient.symptoms[0].severity, None);
}

#[test]
fn non_object_is_rejected() {
    let err = patient_from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CoreError::InvalidField { .. }));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = patient_from_json("{not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn urgency_serializes_with_literal_names() {
    use mentis_core::models::risk::Urgency;

    assert_eq!(serde_json::to_string(&Urgency::Within24h).unwrap(), "\"within_24h\"");
    assert_eq!(serde_json::to_string(&Urgency::WithinWeek).unwrap(), "\"within_week\"");
    assert_eq!(serde_json::to_string(&Urgency::Immediate).unwrap(), "\"immediate\"");
}
