use secrecy::{ExposeSecret, Secret};

/// A one-way password hash in PHC string format.
///
/// The scheme and salt are self-described by the encoding, so verification
/// needs no side-channel lookup. This is the only credential form a stored
/// `User` ever carries.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl From<String> for PasswordHash {
    fn from(hash: String) -> Self {
        Self(Secret::from(hash))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PasswordHash {}
