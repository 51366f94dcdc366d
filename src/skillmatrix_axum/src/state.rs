use skillmatrix_adapters::{AesGcmLinkCipher, Argon2CredentialHasher, SessionTokenIssuer};

/// Shared per-process state handed to every route.
///
/// The store and notifier are generic so tests can swap in in-memory
/// implementations; the crypto services are concrete and cheap to clone.
#[derive(Clone)]
pub struct AppState<U, N> {
    pub user_store: U,
    pub notifier: N,
    pub credential_hasher: Argon2CredentialHasher,
    pub link_cipher: AesGcmLinkCipher,
    pub session_tokens: SessionTokenIssuer,
}

impl<U, N> AppState<U, N> {
    pub fn new(
        user_store: U,
        notifier: N,
        link_cipher: AesGcmLinkCipher,
        session_tokens: SessionTokenIssuer,
    ) -> Self {
        Self {
            user_store,
            notifier,
            credential_hasher: Argon2CredentialHasher::new(),
            link_cipher,
            session_tokens,
        }
    }
}
