use skillmatrix_core::{
    Email, LinkCipher, LinkCipherError, LinkPurpose, UserStore, UserStoreError,
};

/// Error types specific to email verification use case
#[derive(Debug, thiserror::Error)]
pub enum VerifyEmailError {
    /// The decrypted email does not match the one supplied in the query.
    #[error("Verification failed")]
    EmailMismatch,
    #[error("{0}")]
    LinkCipherError(#[from] LinkCipherError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Verify email use case - opens a sealed link and applies its purpose
pub struct VerifyEmailUseCase<'a, U, L>
where
    U: UserStore,
    L: LinkCipher,
{
    user_store: &'a U,
    link_cipher: &'a L,
}

impl<'a, U, L> VerifyEmailUseCase<'a, U, L>
where
    U: UserStore,
    L: LinkCipher,
{
    pub fn new(user_store: &'a U, link_cipher: &'a L) -> Self {
        Self {
            user_store,
            link_cipher,
        }
    }

    /// Execute the verify email use case
    ///
    /// The ciphertext is the source of truth for both the email and the
    /// purpose. The supplied email must match the sealed one; an activation
    /// link flips the user active (idempotently), a password-reset link
    /// only proves email ownership and leaves the flag untouched.
    #[tracing::instrument(name = "VerifyEmailUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &str,
        supplied_email: &Email,
    ) -> Result<LinkPurpose, VerifyEmailError> {
        let claim = self.link_cipher.open(token)?;

        if !claim.matches_email(supplied_email) {
            return Err(VerifyEmailError::EmailMismatch);
        }

        if claim.purpose == LinkPurpose::ActivateAccount {
            self.user_store.activate_user(supplied_email).await?;
        }

        Ok(claim.purpose)
    }
}
