use axum::extract::{Query, State};
use axum::response::Response;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use skillmatrix_application::VerifyEmailUseCase;
use skillmatrix_core::{Email, UserStore, VerificationNotifier};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// The link carries the sealed token plus the recipient address; the
/// token's authenticated payload decides whether this is an activation or
/// a reset confirmation.
#[derive(Debug, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: String,
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Verify email", skip_all)]
pub async fn verify_email<U, N>(
    State(state): State<AppState<U, N>>,
    Query(query): Query<VerifyEmailQuery>,
) -> Result<Response, ApiError>
where
    U: UserStore + Clone + 'static,
    N: VerificationNotifier + Clone + 'static,
{
    let email = Email::try_from(query.email)?;

    let use_case = VerifyEmailUseCase::new(&state.user_store, &state.link_cipher);
    use_case.execute(&query.token, &email).await?;

    Ok(ApiResponse::ok(
        "Email verification successful",
        json!({ "email": email.as_ref().expose_secret() }),
    ))
}
