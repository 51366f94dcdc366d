pub mod config;
pub mod email;
pub mod persistence;
pub mod security;

pub use self::config::Settings;
pub use email::{
    link_mailer::LinkMailer, mock_email_client::MockEmailClient,
    postmark_email_client::PostmarkEmailClient,
};
pub use persistence::{
    hashmap_user_store::HashMapUserStore, postgres_user_store::PostgresUserStore,
};
pub use security::{
    argon2_hasher::Argon2CredentialHasher,
    link_cipher::AesGcmLinkCipher,
    session_token::{SessionClaims, SessionTokenConfig, SessionTokenError, SessionTokenIssuer},
};
