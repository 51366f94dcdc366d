use axum::body::Body;
use axum::http::{Request, Response};
use tracing::Span;
use uuid::Uuid;

/// One span per HTTP request, tagged with a fresh request id so log lines
/// from concurrent requests can be told apart.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::debug_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::debug!("request started");
}

pub fn on_response(response: &Response<Body>, latency: std::time::Duration, _span: &Span) {
    tracing::debug!(status = %response.status(), latency = ?latency, "request completed");
}
