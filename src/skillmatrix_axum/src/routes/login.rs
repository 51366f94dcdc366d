use axum::Json;
use axum::extract::State;
use axum::response::Response;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use skillmatrix_application::LoginUseCase;
use skillmatrix_core::{Email, Password, UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, N>(
    State(state): State<AppState<U, N>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(&state.user_store, &state.credential_hasher);
    let verified_email = use_case.execute(&email, &password).await?;

    let access_token = state.session_tokens.issue(&verified_email)?;

    Ok(ApiResponse::ok(
        "Login successful",
        json!({ "access_token": access_token }),
    ))
}
