use axum::Json;
use axum::extract::State;
use axum::response::Response;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use skillmatrix_application::ForgotPasswordUseCase;
use skillmatrix_core::{Email, UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email_address: Secret<String>,
}

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, N>(
    State(state): State<AppState<U, N>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let email = Email::try_from(request.email_address)?;

    let use_case = ForgotPasswordUseCase::new(&state.link_cipher, &state.notifier);
    use_case.execute(&email).await?;

    Ok(ApiResponse::ok("Password reset email sent", json!({})))
}
