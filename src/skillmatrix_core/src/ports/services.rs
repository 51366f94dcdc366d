use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::Password,
    password_hash::PasswordHash,
    verification_link::{LinkClaim, LinkPurpose},
};

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to dispatch email: {0}")]
    DispatchFailed(String),
}

/// Port trait for the verification/reset mail dispatcher.
///
/// Implementations render the message for the given purpose and hand it to
/// the mail transport; the send is awaited and a failure propagates to the
/// caller.
#[async_trait]
pub trait VerificationNotifier: Send + Sync {
    async fn dispatch_link(
        &self,
        recipient: &Email,
        purpose: LinkPurpose,
        token: &str,
    ) -> Result<(), NotifierError>;
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to process credential: {0}")]
    HashingFailed(String),
}

/// Port trait for one-way password hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError>;

    /// `Ok(false)` for a normal mismatch; `Err` only for infrastructure
    /// failures such as an unparsable stored hash.
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, CredentialError>;
}

#[derive(Debug, Error, PartialEq)]
pub enum LinkCipherError {
    #[error("Invalid or tampered link")]
    InvalidOrTampered,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for sealing and opening verification links.
///
/// `open(seal(claim)) == claim` for every valid claim; any modification of
/// the sealed token must fail with `InvalidOrTampered` rather than decrypt
/// to different data.
pub trait LinkCipher: Send + Sync {
    fn seal(&self, claim: &LinkClaim) -> Result<String, LinkCipherError>;
    fn open(&self, token: &str) -> Result<LinkClaim, LinkCipherError>;
}
