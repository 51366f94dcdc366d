use skillmatrix_core::{
    CredentialError, CredentialHasher, Email, Password, UserStore, UserStoreError,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("No account exists for this email")]
    UnknownEmail,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Account email has not been verified")]
    AccountNotVerified,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("{0}")]
    CredentialError(#[from] CredentialError),
}

/// Login use case - verifies credentials and confirms the account may
/// authenticate
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    user_store: &'a U,
    credential_hasher: &'a H,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
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

    /// Execute the login use case
    ///
    /// Token issuance stays with the caller; on success this returns the
    /// authenticated email for the session token's subject claim.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: &Email, password: &Password) -> Result<Email, LoginError> {
        let user = self
            .user_store
            .find_user(email)
            .await?
            .ok_or(LoginError::UnknownEmail)?;

        let matches = self
            .credential_hasher
            .verify(password, user.password_hash())
            .await?;
        if !matches {
            return Err(LoginError::IncorrectPassword);
        }

        // Unverified accounts hold a credential but may not authenticate.
        if !user.is_active() {
            return Err(LoginError::AccountNotVerified);
        }

        Ok(user.email().clone())
    }
}
