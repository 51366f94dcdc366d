//! Shared in-memory fakes for use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use skillmatrix_core::{
    CredentialError, CredentialHasher, Email, LinkCipher, LinkCipherError, LinkClaim, LinkPurpose,
    NotifierError, Password, PasswordHash, PersonName, User, UserStore, UserStoreError,
    VerificationNotifier,
};

pub fn email(s: &str) -> Email {
    Email::try_from(Secret::from(s.to_owned())).unwrap()
}

pub fn password(s: &str) -> Password {
    Password::try_from(Secret::from(s.to_owned())).unwrap()
}

pub fn person_name(s: &str) -> PersonName {
    PersonName::try_from(s.to_owned()).unwrap()
}

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    pub users: Arc<RwLock<HashMap<Email, User>>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_user(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn activate_user(&self, email: &Email) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        user.activate();
        Ok(())
    }

    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        user.set_password_hash(password_hash);
        Ok(())
    }
}

/// Deterministic stand-in for the Argon2 hasher.
#[derive(Clone, Default)]
pub struct FakeCredentialHasher;

#[async_trait]
impl CredentialHasher for FakeCredentialHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        Ok(PasswordHash::from(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, CredentialError> {
        let rehashed = format!("hashed:{}", candidate.as_ref().expose_secret());
        Ok(rehashed == *expected.as_ref().expose_secret())
    }
}

/// Reversible stand-in for the AES-GCM link cipher.
#[derive(Clone, Default)]
pub struct JsonLinkCipher;

impl LinkCipher for JsonLinkCipher {
    fn seal(&self, claim: &LinkClaim) -> Result<String, LinkCipherError> {
        serde_json::to_string(claim).map_err(|e| LinkCipherError::UnexpectedError(e.to_string()))
    }

    fn open(&self, token: &str) -> Result<LinkClaim, LinkCipherError> {
        serde_json::from_str(token).map_err(|_| LinkCipherError::InvalidOrTampered)
    }
}

#[derive(Clone)]
pub struct DispatchedLink {
    pub recipient: Email,
    pub purpose: LinkPurpose,
    pub token: String,
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub dispatched: Arc<RwLock<Vec<DispatchedLink>>>,
    pub fail_next: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            dispatched: Arc::default(),
            fail_next: true,
        }
    }
}

#[async_trait]
impl VerificationNotifier for RecordingNotifier {
    async fn dispatch_link(
        &self,
        recipient: &Email,
        purpose: LinkPurpose,
        token: &str,
    ) -> Result<(), NotifierError> {
        if self.fail_next {
            return Err(NotifierError::DispatchFailed("smtp unreachable".to_owned()));
        }
        self.dispatched.write().await.push(DispatchedLink {
            recipient: recipient.clone(),
            purpose,
            token: token.to_owned(),
        });
        Ok(())
    }
}
