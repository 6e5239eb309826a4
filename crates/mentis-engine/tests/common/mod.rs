#![allow(dead_code)]

use mentis_core::models::patient::PatientProfile;
use mentis_core::models::symptom::{ClinicalSymptom, Frequency, Impact};

pub fn symptom(name: &str) -> ClinicalSymptom {
    ClinicalSymptom {
        name: name.to_string(),
        severity: Some(5),
        duration_days: Some(30),
        frequency: Some(Frequency::Daily),
        impact: Some(Impact::Moderate),
    }
}

pub fn patient_with_symptoms(names: &[&str]) -> PatientProfile {
    PatientProfile {
        id: "patient-1".to_string(),
        age: Some(35),
        gender: "female".to_string(),
        medical_history: Default::default(),
        current_medications: Vec::new(),
        symptoms: names.iter().map(|n| symptom(n)).collect(),
        risk_factors: Default::default(),
        previous_diagnoses: Default::default(),
    }
}

pub fn patient_with_medications(meds: &[&str]) -> PatientProfile {
    let mut patient = patient_with_symptoms(&[]);
    patient.current_medications = meds.iter().map(|m| m.to_string()).collect();
    patient
}

pub fn patient_with_risk_factors(factors: &[&str]) -> PatientProfile {
    let mut patient = patient_with_symptoms(&[]);
    patient.risk_factors = factors.iter().map(|f| f.to_string()).collect();
    patient
}
