use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use mentis_core::models::notes::NoteAnalysis;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

pub async fn analyze_notes(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> Json<NoteAnalysis> {
    Json(state.engine().analyze_notes(&req.notes))
}
