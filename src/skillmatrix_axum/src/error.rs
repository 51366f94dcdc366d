use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use skillmatrix_adapters::SessionTokenError;
use skillmatrix_application::{
    ForgotPasswordError, LoginError, SignupError, UpdatePasswordError, VerifyEmailError,
};
use skillmatrix_core::{
    EmailError, LinkCipherError, PasswordError, PersonNameError, UserStoreError,
};

use crate::response::ApiResponse;

/// Request-boundary error type.
///
/// Every handled failure maps to 400 with the standard envelope; 401 is
/// reserved for missing or invalid bearer credentials on protected routes;
/// anything unexpected is a 500. The duplicate-email message is a stable
/// string, never the underlying driver error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Password and confirm password do not match")]
    PasswordMismatch,
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Verification failed")]
    VerificationFailed,
    #[error("No account exists for this email")]
    UnknownEmail,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Account email has not been verified")]
    AccountNotVerified,
    #[error("Invalid or tampered verification link")]
    InvalidLink,
    #[error("Failed to send email")]
    MailDispatchFailed,
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token")]
    TokenInvalid,
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::MissingToken | ApiError::TokenExpired | ApiError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::PasswordMismatch
            | ApiError::DuplicateEmail
            | ApiError::VerificationFailed
            | ApiError::UnknownEmail
            | ApiError::IncorrectPassword
            | ApiError::AccountNotVerified
            | ApiError::InvalidLink
            | ApiError::MailDispatchFailed
            | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }

        let body = Json(ApiResponse {
            message: self.to_string(),
            data: json!({}),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PersonNameError> for ApiError {
    fn from(error: PersonNameError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::ConfirmationMismatch => ApiError::PasswordMismatch,
            PasswordError::TooShort => ApiError::InvalidInput(error.to_string()),
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::DuplicateEmail,
            UserStoreError::UserNotFound => ApiError::UnknownEmail,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<LinkCipherError> for ApiError {
    fn from(error: LinkCipherError) -> Self {
        match error {
            LinkCipherError::InvalidOrTampered => ApiError::InvalidLink,
            LinkCipherError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionTokenError> for ApiError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::Expired => ApiError::TokenExpired,
            SessionTokenError::Invalid => ApiError::TokenInvalid,
            SessionTokenError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::UserStoreError(e) => e.into(),
            SignupError::CredentialError(e) => ApiError::UnexpectedError(e.to_string()),
            SignupError::LinkCipherError(e) => e.into(),
            SignupError::NotifierError(_) => ApiError::MailDispatchFailed,
        }
    }
}

impl From<VerifyEmailError> for ApiError {
    fn from(error: VerifyEmailError) -> Self {
        match error {
            VerifyEmailError::EmailMismatch => ApiError::VerificationFailed,
            VerifyEmailError::LinkCipherError(e) => e.into(),
            VerifyEmailError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UnknownEmail => ApiError::UnknownEmail,
            LoginError::IncorrectPassword => ApiError::IncorrectPassword,
            LoginError::AccountNotVerified => ApiError::AccountNotVerified,
            LoginError::UserStoreError(e) => e.into(),
            LoginError::CredentialError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<ForgotPasswordError> for ApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::LinkCipherError(e) => e.into(),
            ForgotPasswordError::NotifierError(_) => ApiError::MailDispatchFailed,
        }
    }
}

impl From<UpdatePasswordError> for ApiError {
    fn from(error: UpdatePasswordError) -> Self {
        match error {
            UpdatePasswordError::UnknownEmail => ApiError::UnknownEmail,
            UpdatePasswordError::UserStoreError(e) => e.into(),
            UpdatePasswordError::CredentialError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}
