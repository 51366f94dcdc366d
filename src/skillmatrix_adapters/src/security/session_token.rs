use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use skillmatrix_core::Email;
use thiserror::Error;

#[derive(Clone)]
pub struct SessionTokenConfig {
    pub signing_secret: Secret<String>,
    pub token_ttl_minutes: i64,
}

impl SessionTokenConfig {
    fn secret_bytes(&self) -> &[u8] {
        self.signing_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionTokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Stateless session token issuer.
///
/// Tokens are HS256 JWTs carrying the subject email and an absolute
/// expiry. There is no refresh or rotation: a token lives for the
/// configured TTL and validation fails strictly after that instant.
#[derive(Clone)]
pub struct SessionTokenIssuer {
    config: SessionTokenConfig,
}

impl SessionTokenIssuer {
    pub fn new(config: SessionTokenConfig) -> Self {
        Self { config }
    }

    pub fn issue(&self, email: &Email) -> Result<String, SessionTokenError> {
        let ttl = chrono::Duration::try_minutes(self.config.token_ttl_minutes).ok_or(
            SessionTokenError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let exp = Utc::now()
            .checked_add_signed(ttl)
            .ok_or(SessionTokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        // Cast exp to a usize, which is what SessionClaims expects
        let exp: usize = exp.try_into().map_err(|_| {
            SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string())
        })?;

        let claims = SessionClaims {
            sub: email.as_ref().clone(),
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )
        .map_err(|e| SessionTokenError::UnexpectedError(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        let mut validation = Validation::default();
        // Expiry is strict: no clock-skew leeway.
        validation.leeway = 0;

        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionTokenError::Expired,
            _ => SessionTokenError::Invalid,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: Secret<String>,
    pub exp: usize,
}

impl PartialEq for SessionClaims {
    fn eq(&self, other: &Self) -> bool {
        self.sub.expose_secret() == other.sub.expose_secret() && self.exp == other.exp
    }
}

impl Serialize for SessionClaims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("SessionClaims", 2)?;
        state.serialize_field("sub", &self.sub.expose_secret())?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
