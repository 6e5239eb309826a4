use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single presenting symptom, captured by the caller for one assessment.
///
/// Only `name` takes part in scoring. The remaining attributes are carried
/// through for display and may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSymptom {
    pub name: String,
    /// Self-reported or clinician-rated severity, 1–10.
    #[serde(default)]
    pub severity: Option<u8>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub impact: Option<Impact>,
}

impl ClinicalSymptom {
    pub const MIN_SEVERITY: u8 = 1;
    pub const MAX_SEVERITY: u8 = 10;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Occasional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Impact {
    Mild,
    Moderate,
    Severe,
}
