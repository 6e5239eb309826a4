use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SimilarityRequest {
    pub a: String,
    pub b: String,
}

#[derive(Serialize)]
pub struct SimilarityResponse {
    pub score: f64,
    /// Whether the pair clears the active match threshold.
    pub is_match: bool,
}

pub async fn score_similarity(
    State(state): State<AppState>,
    Json(req): Json<SimilarityRequest>,
) -> Json<SimilarityResponse> {
    let engine = state.engine();
    let score = engine.similarity(&req.a, &req.b);
    Json(SimilarityResponse {
        score,
        is_match: score > engine.policy().match_threshold,
    })
}
