use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct InteractionRequest {
    pub medications: Vec<String>,
}

#[derive(Serialize)]
pub struct InteractionResponse {
    pub interactions: Vec<String>,
}

pub async fn check_interactions(
    State(state): State<AppState>,
    Json(req): Json<InteractionRequest>,
) -> Json<InteractionResponse> {
    Json(InteractionResponse {
        interactions: state.engine().check_interactions(&req.medications),
    })
}
