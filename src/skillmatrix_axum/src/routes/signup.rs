use axum::Json;
use axum::extract::State;
use axum::response::Response;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use skillmatrix_application::SignupUseCase;
use skillmatrix_core::{Email, Password, PersonName, UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email_address: Secret<String>,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<U, N>(
    State(state): State<AppState<U, N>>,
    Json(request): Json<SignupRequest>,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let full_name = PersonName::try_from(request.full_name)?;
    let email = Email::try_from(request.email_address)?;
    let password = Password::confirmed(request.password, request.confirm_password)?;

    let use_case = SignupUseCase::new(
        &state.user_store,
        &state.credential_hasher,
        &state.link_cipher,
        &state.notifier,
    );
    let receipt = use_case
        .execute(full_name.clone(), email.clone(), password)
        .await?;

    Ok(ApiResponse::ok(
        "User registered, email verification awaited",
        json!({
            "hashed_password": receipt.password_hash.as_ref().expose_secret(),
            "email_address": email.as_ref().expose_secret(),
            "full_name": full_name.as_ref(),
        }),
    ))
}
