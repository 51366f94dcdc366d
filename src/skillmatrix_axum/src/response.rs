use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// The `{message, data}` envelope every endpoint responds with.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub message: String,
    pub data: Value,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, data: Value) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                message: message.into(),
                data,
            }),
        )
            .into_response()
    }
}
