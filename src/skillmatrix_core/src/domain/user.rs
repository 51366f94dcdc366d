use super::email::Email;
use super::password_hash::PasswordHash;
use super::person_name::PersonName;

/// An identity record.
///
/// A user is `Pending` (inactive) from registration until their email
/// address is verified, after which they are `Active`. Activation is the
/// only state transition; users are never deleted by this flow.
#[derive(Debug, Clone)]
pub struct User {
    full_name: PersonName,
    email: Email,
    password_hash: PasswordHash,
    is_active: bool,
}

impl User {
    /// A freshly registered user, awaiting email verification.
    pub fn register(full_name: PersonName, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            full_name,
            email,
            password_hash,
            is_active: false,
        }
    }

    /// Reconstruct a user from its persisted representation.
    pub fn from_storage(
        full_name: PersonName,
        email: Email,
        password_hash: PasswordHash,
        is_active: bool,
    ) -> Self {
        Self {
            full_name,
            email,
            password_hash,
            is_active,
        }
    }

    pub fn full_name(&self) -> &PersonName {
        &self.full_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Idempotent: activating an already-active user is harmless.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn set_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}
