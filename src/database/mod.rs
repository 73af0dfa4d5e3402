//! # Database Module
//!
//! Credential store abstraction and its in-memory backend.
//! Handlers only see `UserRepository`, so a persistent backend can be swapped in.

pub mod memory;
pub mod models;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::InMemoryUserStore;
pub use models::{NewUser, Role, User, WarehouseManager};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username '{0}' is already registered")]
    UsernameTaken(String),
}

/// Storage contract for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, assigning the next sequential id
    async fn add(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Option<User>;

    /// All users in insertion order
    async fn list(&self) -> Vec<User>;
}
