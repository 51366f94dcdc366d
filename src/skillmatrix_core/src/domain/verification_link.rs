use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::email::Email;

/// What a verification link is allowed to do.
///
/// The purpose travels inside the authenticated ciphertext, so an account
/// activation link can never be replayed as a password reset link or vice
/// versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPurpose {
    ActivateAccount,
    PasswordReset,
}

/// The plaintext sealed into a verification link.
///
/// Not persisted anywhere: the ciphertext handed to the recipient is the
/// sole source of truth for which email the link belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkClaim {
    pub email: String,
    pub purpose: LinkPurpose,
    pub issued_at: i64,
}

impl LinkClaim {
    pub fn new(email: &Email, purpose: LinkPurpose) -> Self {
        Self {
            email: email.as_ref().expose_secret().clone(),
            purpose,
            issued_at: chrono::Utc::now().timestamp(),
        }
    }

    /// The redundant-but-cheap defense against a tampered query string.
    pub fn matches_email(&self, email: &Email) -> bool {
        self.email == *email.as_ref().expose_secret()
    }
}
