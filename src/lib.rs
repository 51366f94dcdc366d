//! # Skill Matrix Identity Service Library
//!
//! This is a facade crate that re-exports all public APIs from the identity
//! service components. Use this crate to get access to the whole
//! authentication-and-verification flow in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `LinkClaim`, etc.
//! - **Ports**: `UserStore`, `EmailClient`, `CredentialHasher`,
//!   `LinkCipher`, `VerificationNotifier`
//! - **Use cases**: `SignupUseCase`, `VerifyEmailUseCase`, `LoginUseCase`,
//!   `ForgotPasswordUseCase`, `UpdatePasswordUseCase`
//! - **Adapters**: `PostgresUserStore`, `Argon2CredentialHasher`,
//!   `AesGcmLinkCipher`, `SessionTokenIssuer`, `PostmarkEmailClient`,
//!   `LinkMailer`, etc.
//! - **Service**: `IdentityService` - the assembled HTTP service

// ============================================================================
// Core Domain Types and Ports
// ============================================================================

/// Core domain types and port traits
pub mod core {
    pub use skillmatrix_core::*;
}

pub use skillmatrix_core::{
    CredentialHasher, Email, EmailClient, LinkCipher, LinkClaim, LinkPurpose, Password,
    PasswordHash, PersonName, User, UserStore, UserStoreError, VerificationNotifier,
};

// ============================================================================
// Use Cases
// ============================================================================

/// Application use cases
pub mod application {
    pub use skillmatrix_application::*;
}

pub use skillmatrix_application::{
    ForgotPasswordUseCase, LoginUseCase, SignupUseCase, UpdatePasswordUseCase, VerifyEmailUseCase,
};

// ============================================================================
// Adapters
// ============================================================================

/// Infrastructure adapters: persistence, crypto, email, configuration
pub mod adapters {
    pub use skillmatrix_adapters::*;
}

pub use skillmatrix_adapters::{
    AesGcmLinkCipher, Argon2CredentialHasher, HashMapUserStore, LinkMailer, MockEmailClient,
    PostgresUserStore, PostmarkEmailClient, SessionTokenIssuer, Settings,
};

// ============================================================================
// HTTP Layer and Service
// ============================================================================

/// Axum routes, response envelope and error mapping
pub mod http {
    pub use skillmatrix_axum::*;
}

pub use skillmatrix_axum::{ApiError, ApiResponse, AppState};

pub use skillmatrix_identity_service::IdentityService;

// Re-export key dependencies that appear in the public API
pub use async_trait;
pub use axum;
pub use tokio;

pub use secrecy::{ExposeSecret, Secret};
