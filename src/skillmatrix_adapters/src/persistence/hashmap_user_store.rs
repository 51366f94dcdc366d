use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use skillmatrix_core::{Email, PasswordHash, User, UserStore, UserStoreError};

/// In-memory user store for tests and local development.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_user(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
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
