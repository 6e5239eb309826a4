pub mod knowledge;
pub mod notes;
pub mod patient;
pub mod report;
pub mod risk;
pub mod suggestion;
pub mod symptom;
