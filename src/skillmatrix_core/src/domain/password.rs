use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 8;

/// A validated plaintext password, prior to hashing.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,
    #[error("Password and confirm password do not match")]
    ConfirmationMismatch,
}

impl Password {
    /// Parse a password together with its confirmation.
    ///
    /// The plaintext comparison happens here, before any hashing can take
    /// place downstream. A `Password` for a credential-writing flow only
    /// exists once the two inputs are byte-identical.
    pub fn confirmed(
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<Self, PasswordError> {
        if password.expose_secret() != confirmation.expose_secret() {
            return Err(PasswordError::ConfirmationMismatch);
        }
        Self::try_from(password)
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().len() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
