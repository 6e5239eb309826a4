//! Validated, read-only knowledge tables.
//!
//! A [`KnowledgeBase`] is built once and never mutated. Updating knowledge
//! means building a new one and swapping it in through
//! [`crate::store::KnowledgeStore`].

pub mod file;
pub mod reference;

use std::collections::{HashMap, HashSet};

use mentis_core::models::knowledge::{
    DiagnosisDefinition, DiagnosisGuidance, MedicationReference, TreatmentDefinition,
};

use crate::error::KnowledgeError;

/// Diagnosis definitions in load order, indexed by code.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisCatalog {
    entries: Vec<DiagnosisDefinition>,
    by_code: HashMap<String, usize>,
    guidance: HashMap<String, DiagnosisGuidance>,
}

impl DiagnosisCatalog {
    /// Build a catalog, rejecting duplicate codes, empty or repeated symptom
    /// keywords, and guidance for codes that do not exist.
    pub fn new(
        entries: Vec<DiagnosisDefinition>,
        guidance: HashMap<String, DiagnosisGuidance>,
    ) -> Result<Self, KnowledgeError> {
        let mut by_code = HashMap::with_capacity(entries.len());
        for (i, def) in entries.iter().enumerate() {
            if def.symptom_keywords.is_empty() {
                return Err(KnowledgeError::EmptyKeywords(def.code.clone()));
            }
            // Keywords form a set; matching ignores case and surrounding space.
            let mut seen = HashSet::with_capacity(def.symptom_keywords.len());
            if let Some(keyword) = def
                .symptom_keywords
                .iter()
                .find(|kw| !seen.insert(kw.trim().to_lowercase()))
            {
                return Err(KnowledgeError::DuplicateKeyword {
                    code: def.code.clone(),
                    keyword: keyword.clone(),
                });
            }
            if by_code.insert(def.code.clone(), i).is_some() {
                return Err(KnowledgeError::DuplicateCode(def.code.clone()));
            }
        }

        if let Some(code) = guidance.keys().find(|code| !by_code.contains_key(*code)) {
            return Err(KnowledgeError::UnknownGuidanceCode(code.clone()));
        }

        Ok(Self {
            entries,
            by_code,
            guidance,
        })
    }

    pub fn get(&self, code: &str) -> Option<&DiagnosisDefinition> {
        self.by_code.get(code).map(|&i| &self.entries[i])
    }

    /// Iterate definitions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosisDefinition> {
        self.entries.iter()
    }

    /// Differentials and assessments for a code, if any were recorded.
    pub fn guidance(&self, code: &str) -> Option<&DiagnosisGuidance> {
        self.guidance.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All static tables the engine reads from.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub diagnoses: DiagnosisCatalog,
    pub treatments: Vec<TreatmentDefinition>,
    pub medications: Vec<MedicationReference>,
}

impl KnowledgeBase {
    pub fn new(
        diagnoses: Vec<DiagnosisDefinition>,
        guidance: HashMap<String, DiagnosisGuidance>,
        treatments: Vec<TreatmentDefinition>,
        medications: Vec<MedicationReference>,
    ) -> Result<Self, KnowledgeError> {
        Ok(Self {
            diagnoses: DiagnosisCatalog::new(diagnoses, guidance)?,
            treatments,
            medications,
        })
    }

    /// The built-in reference knowledge base.
    pub fn reference() -> Self {
        reference::knowledge_base()
    }
}
