use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, password_hash::PasswordHash, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence collaborator for identity records.
///
/// The store owns the unique-email constraint; a racing duplicate signup
/// surfaces as `UserAlreadyExists` from `add_user`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn find_user(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn activate_user(&self, email: &Email) -> Result<(), UserStoreError>;
    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError>;
}
