//! JSON knowledge-base files.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mentis_core::models::knowledge::{
    DiagnosisDefinition, DiagnosisGuidance, MedicationReference, TreatmentDefinition,
};

use super::KnowledgeBase;
use crate::error::KnowledgeError;

/// Current knowledge file version. Bump this when the file shape changes.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk shape of a knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    /// Missing or 0 = pre-versioned file, read as the current shape.
    #[serde(default)]
    pub version: u32,
    pub diagnoses: Vec<DiagnosisDefinition>,
    #[serde(default)]
    pub guidance: HashMap<String, DiagnosisGuidance>,
    #[serde(default)]
    pub treatments: Vec<TreatmentDefinition>,
    #[serde(default)]
    pub medications: Vec<MedicationReference>,
}

impl KnowledgeFile {
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeError> {
        if self.version > CURRENT_VERSION {
            return Err(KnowledgeError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_VERSION,
            });
        }
        KnowledgeBase::new(self.diagnoses, self.guidance, self.treatments, self.medications)
    }
}

impl KnowledgeBase {
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = serde_json::from_str(json)?;
        file.into_knowledge_base()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let kb = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            diagnoses = kb.diagnoses.len(),
            treatments = kb.treatments.len(),
            medications = kb.medications.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }
}
