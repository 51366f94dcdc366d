use argon2::{
    Algorithm, Argon2, Params, PasswordHash as ParsedHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use skillmatrix_core::{CredentialError, CredentialHasher, Password, PasswordHash};

/// Argon2id credential hasher.
///
/// Hashing and verification run on the blocking pool; the parameters are
/// recorded in the PHC output, so verification reads them back from the
/// stored hash itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| CredentialError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, CredentialError> {
        let candidate = candidate.clone();
        let expected = expected.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = ParsedHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

                match hasher()?.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &parsed,
                ) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialError::HashingFailed(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialError::HashingFailed(e.to_string()))?
    }
}

fn hasher() -> Result<Argon2<'static>, CredentialError> {
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| CredentialError::HashingFailed(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
