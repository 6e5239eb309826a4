//! mentis-core
//!
//! Pure domain types for the clinical decision support engine: patient
//! profiles, knowledge-base entries, and the ephemeral results the engine
//! hands back. No engine logic and no I/O. This is the shared vocabulary of
//! the Mentis system.

pub mod error;
pub mod models;
pub mod validate;
