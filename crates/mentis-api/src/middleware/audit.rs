use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one `api_request` event per call under the `mentis::audit` target,
/// so the audit sink can subscribe to it apart from engine diagnostics.
///
/// Only the route, status and latency are recorded. Bodies carry patient
/// data and never reach the log.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    tracing::info!(
        target: "mentis::audit",
        method = %method,
        route = %route,
        status = status.as_u16(),
        rejected = status.is_client_error(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
