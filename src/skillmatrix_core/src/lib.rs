pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    password::{Password, PasswordError},
    password_hash::PasswordHash,
    person_name::{PersonName, PersonNameError},
    user::User,
    verification_link::{LinkClaim, LinkPurpose},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{
        CredentialError, CredentialHasher, EmailClient, LinkCipher, LinkCipherError,
        NotifierError, VerificationNotifier,
    },
};
