//! mentis-engine
//!
//! Clinical decision support over a static knowledge base. Pure computation
//! with no I/O beyond optional knowledge-file loading and no shared mutable
//! state.
//!
//! Each component is a module of free functions that can be called on its
//! own; [`ClinicalDecisionSupport`] bundles a knowledge-base snapshot and a
//! [`ScoringPolicy`] for callers that want a single handle.

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod interactions;
pub mod knowledge;
pub mod matching;
pub mod notes;
pub mod policy;
pub mod risk;
pub mod similarity;
pub mod store;
pub mod treatments;

pub use context::ClinicalDecisionSupport;
pub use knowledge::KnowledgeBase;
pub use policy::ScoringPolicy;
pub use store::KnowledgeStore;
