use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub diagnoses: usize,
    pub treatments: usize,
    pub medications: usize,
}

/// Re-read the configured knowledge file (or the reference tables) and swap
/// it in whole. A file that fails validation leaves the current table active.
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let kb = config::load_knowledge(state.knowledge_path.as_deref())
        .await
        .map_err(|e| ApiError::Internal(format!("knowledge base reload failed: {e}")))?;

    let response = ReloadResponse {
        diagnoses: kb.diagnoses.len(),
        treatments: kb.treatments.len(),
        medications: kb.medications.len(),
    };
    state.store.replace(kb);
    Ok(Json(response))
}
