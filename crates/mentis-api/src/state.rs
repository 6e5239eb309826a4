use std::path::PathBuf;
use std::sync::Arc;

use mentis_engine::{ClinicalDecisionSupport, KnowledgeBase, KnowledgeStore, ScoringPolicy};

use crate::config::{self, ApiConfig};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<KnowledgeStore>,
    pub policy: Arc<ScoringPolicy>,
    /// Where `/knowledge-base/reload` re-reads from.
    pub knowledge_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(kb: KnowledgeBase, policy: ScoringPolicy, knowledge_path: Option<PathBuf>) -> Self {
        Self {
            store: Arc::new(KnowledgeStore::new(kb)),
            policy: Arc::new(policy),
            knowledge_path,
        }
    }

    pub async fn from_config(config: &ApiConfig) -> eyre::Result<Self> {
        let kb = config::load_knowledge(config.knowledge_path.as_deref()).await?;
        let policy = config::load_policy(config.policy_path.as_deref()).await?;
        Ok(Self::new(kb, policy, config.knowledge_path.clone()))
    }

    /// An engine handle over the current knowledge snapshot.
    pub fn engine(&self) -> ClinicalDecisionSupport {
        ClinicalDecisionSupport::new(self.store.snapshot(), (*self.policy).clone())
    }
}
