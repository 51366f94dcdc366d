use skillmatrix_core::{
    CredentialError, CredentialHasher, Email, LinkCipher, LinkCipherError, LinkClaim, LinkPurpose,
    NotifierError, Password, PasswordHash, PersonName, User, UserStore, UserStoreError,
    VerificationNotifier,
};

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("{0}")]
    CredentialError(#[from] CredentialError),
    #[error("{0}")]
    LinkCipherError(#[from] LinkCipherError),
    #[error("Failed to send verification email: {0}")]
    NotifierError(#[from] NotifierError),
}

/// What signup hands back for the response envelope.
#[derive(Debug)]
pub struct SignupReceipt {
    pub password_hash: PasswordHash,
}

/// Signup use case - registers a pending user and dispatches the
/// verification link
pub struct SignupUseCase<'a, U, H, L, N>
where
    U: UserStore,
    H: CredentialHasher,
    L: LinkCipher,
    N: VerificationNotifier,
{
    user_store: &'a U,
    credential_hasher: &'a H,
    link_cipher: &'a L,
    notifier: &'a N,
}

impl<'a, U, H, L, N> SignupUseCase<'a, U, H, L, N>
where
    U: UserStore,
    H: CredentialHasher,
    L: LinkCipher,
    N: VerificationNotifier,
{
    pub fn new(
        user_store: &'a U,
        credential_hasher: &'a H,
        link_cipher: &'a L,
        notifier: &'a N,
    ) -> Self {
        Self {
            user_store,
            credential_hasher,
            link_cipher,
            notifier,
        }
    }

    /// Execute the signup use case
    ///
    /// The user row is committed before the email dispatch is awaited, so a
    /// dispatch failure fails the request without leaving the record in an
    /// inconsistent state.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        full_name: PersonName,
        email: Email,
        password: Password,
    ) -> Result<SignupReceipt, SignupError> {
        let password_hash = self.credential_hasher.hash(&password).await?;

        let user = User::register(full_name, email.clone(), password_hash.clone());
        self.user_store.add_user(user).await?;

        let claim = LinkClaim::new(&email, LinkPurpose::ActivateAccount);
        let token = self.link_cipher.seal(&claim)?;
        self.notifier
            .dispatch_link(&email, LinkPurpose::ActivateAccount, &token)
            .await?;

        Ok(SignupReceipt { password_hash })
    }
}
