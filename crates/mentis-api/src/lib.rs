//! mentis-api
//!
//! JSON boundary around the decision support engine. Validates patient
//! payloads before any component runs and maps results straight to JSON.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/diagnoses", get(routes::diagnoses::list_diagnoses))
        .route("/diagnostics", post(routes::diagnoses::suggest_diagnoses))
        .route("/treatments", post(routes::treatments::recommend_treatments))
        .route("/interactions", post(routes::medications::check_interactions))
        .route("/risk", post(routes::risk::assess_risk))
        .route("/notes", post(routes::notes::analyze_notes))
        .route("/similarity", post(routes::similarity::score_similarity))
        .route("/evaluate", post(routes::evaluate::evaluate))
        .route("/knowledge-base/reload", post(routes::knowledge::reload))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
