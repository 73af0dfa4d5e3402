//! In-memory credential store
//!
//! Holds users in a `Vec` guarded by a write lock, so id assignment and the
//! duplicate-username check happen atomically. Contents are lost on restart.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::database::{NewUser, StoreError, User, UserRepository};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn add(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write();

        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken(user.username));
        }

        // Users are never deleted, so len + 1 is always unused
        let stored = User {
            id: users.len() as u64 + 1,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn list(&self) -> Vec<User> {
        self.users.read().clone()
    }
}
