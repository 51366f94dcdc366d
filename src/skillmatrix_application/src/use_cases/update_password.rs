use skillmatrix_core::{
    CredentialError, CredentialHasher, Email, Password, UserStore, UserStoreError,
};

/// Error types specific to update password use case
#[derive(Debug, thiserror::Error)]
pub enum UpdatePasswordError {
    #[error("No account exists for this email")]
    UnknownEmail,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("{0}")]
    CredentialError(#[from] CredentialError),
}

/// Update password use case - swaps in a new credential
pub struct UpdatePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    user_store: &'a U,
    credential_hasher: &'a H,
}

impl<'a, U, H> UpdatePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    pub fn new(user_store: &'a U, credential_hasher: &'a H) -> Self {
        Self {
            user_store,
            credential_hasher,
        }
    }

    /// Execute the update password use case
    ///
    /// Only the hashed form is ever handed to the store; the plaintext
    /// never leaves this function.
    #[tracing::instrument(name = "UpdatePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UpdatePasswordError> {
        let password_hash = self.credential_hasher.hash(&new_password).await?;

        self.user_store
            .set_password_hash(email, password_hash)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => UpdatePasswordError::UnknownEmail,
                other => UpdatePasswordError::UserStoreError(other),
            })
    }
}
