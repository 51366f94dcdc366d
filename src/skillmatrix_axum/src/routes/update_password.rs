use axum::Json;
use axum::extract::State;
use axum::response::Response;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use skillmatrix_application::UpdatePasswordUseCase;
use skillmatrix_core::{Email, Password, UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
}

#[tracing::instrument(name = "Update password", skip_all)]
pub async fn update_password<U, N>(
    State(state): State<AppState<U, N>>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::confirmed(request.password, request.confirm_password)?;

    let use_case = UpdatePasswordUseCase::new(&state.user_store, &state.credential_hasher);
    use_case.execute(&email, password).await?;

    Ok(ApiResponse::ok("Password changed successfully", json!({})))
}
