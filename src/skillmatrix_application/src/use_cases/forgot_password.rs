use skillmatrix_core::{
    Email, LinkCipher, LinkCipherError, LinkClaim, LinkPurpose, NotifierError,
    VerificationNotifier,
};

/// Error types specific to forgot password use case
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("{0}")]
    LinkCipherError(#[from] LinkCipherError),
    #[error("Failed to send reset email: {0}")]
    NotifierError(#[from] NotifierError),
}

/// Forgot password use case - dispatches a reset link
pub struct ForgotPasswordUseCase<'a, L, N>
where
    L: LinkCipher,
    N: VerificationNotifier,
{
    link_cipher: &'a L,
    notifier: &'a N,
}

impl<'a, L, N> ForgotPasswordUseCase<'a, L, N>
where
    L: LinkCipher,
    N: VerificationNotifier,
{
    pub fn new(link_cipher: &'a L, notifier: &'a N) -> Self {
        Self {
            link_cipher,
            notifier,
        }
    }

    /// Execute the forgot password use case
    ///
    /// Deliberately no existence check: the response must not reveal
    /// whether an account exists. A link for an unknown address is sealed
    /// and mailed all the same; the eventual update step is where the
    /// lookup happens.
    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: &Email) -> Result<(), ForgotPasswordError> {
        let claim = LinkClaim::new(email, LinkPurpose::PasswordReset);
        let token = self.link_cipher.seal(&claim)?;
        self.notifier
            .dispatch_link(email, LinkPurpose::PasswordReset, &token)
            .await?;
        Ok(())
    }
}
