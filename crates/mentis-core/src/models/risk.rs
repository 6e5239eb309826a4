use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskType {
    Suicide,
    SelfHarm,
    Violence,
    SubstanceAbuse,
    MedicationInteraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// How quickly a clinician should act on an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    Immediate,
    #[serde(rename = "within_24h")]
    Within24h,
    WithinWeek,
    Routine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub risk_type: RiskType,
    pub risk_level: RiskLevel,
    /// 0–100.
    pub score: u8,
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency: Urgency,
}
