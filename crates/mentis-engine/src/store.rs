use std::sync::{Arc, PoisonError, RwLock};

use crate::knowledge::KnowledgeBase;

/// A swap point for the active knowledge base.
///
/// Readers take an `Arc` snapshot and keep using it for the whole call;
/// [`KnowledgeStore::replace`] swaps in a complete new table, so no reader
/// ever sees a partially updated one. The lock is held only for the pointer
/// clone or swap.
#[derive(Debug)]
pub struct KnowledgeStore {
    current: RwLock<Arc<KnowledgeBase>>,
}

impl KnowledgeStore {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            current: RwLock::new(Arc::new(kb)),
        }
    }

    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new knowledge base, returning the one it replaced.
    pub fn replace(&self, kb: KnowledgeBase) -> Arc<KnowledgeBase> {
        let next = Arc::new(kb);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            diagnoses = guard.diagnoses.len(),
            treatments = guard.treatments.len(),
            medications = guard.medications.len(),
            "knowledge base replaced"
        );
        previous
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new(KnowledgeBase::reference())
    }
}
