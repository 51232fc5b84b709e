use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

use super::request_id::REQUEST_ID_HEADER;

/// Logs one `request_completed` event per request under the `metrics` target.
/// Server errors are raised to WARN so failed extractions stand out.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(
            target: "metrics",
            method = %method,
            path = %path,
            status,
            latency_ms = %latency.as_millis(),
            request_id = %request_id,
            "request_completed"
        );
    } else {
        info!(
            target: "metrics",
            method = %method,
            path = %path,
            status,
            latency_ms = %latency.as_millis(),
            request_id = %request_id,
            "request_completed"
        );
    }

    response
}
