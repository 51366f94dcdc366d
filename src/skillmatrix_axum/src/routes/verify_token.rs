use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::Response;
use secrecy::ExposeSecret;
use serde_json::json;

use skillmatrix_core::{UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Protected probe route: validates the bearer token presented in the
/// `Authorization` header and echoes the subject back.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<U, N>(
    State(state): State<AppState<U, N>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?;
    let claims = state.session_tokens.validate(token)?;

    Ok(ApiResponse::ok(
        "Token is valid",
        json!({ "email": claims.sub.expose_secret() }),
    ))
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers.get(AUTHORIZATION).ok_or(ApiError::MissingToken)?;
    let value = value.to_str().map_err(|_| ApiError::TokenInvalid)?;
    value
        .strip_prefix("Bearer ")
        .ok_or(ApiError::TokenInvalid)
}
