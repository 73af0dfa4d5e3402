//! Startup seeding
//!
//! Populates the credential store with the built-in accounts. Their passwords
//! come from configuration and are hashed here, so no digest lives in source.

use anyhow::{Context, Result};

use crate::auth::PasswordService;
use crate::config::SeedConfig;
use crate::database::{NewUser, Role, StoreError, UserRepository};

/// Insert the default `user` and `admin` accounts, skipping any that exist
pub async fn seed_default_users(
    repo: &dyn UserRepository,
    passwords: &PasswordService,
    seed: &SeedConfig,
) -> Result<()> {
    let accounts = [
        ("user", seed.user_password.as_str(), Role::User),
        ("admin", seed.admin_password.as_str(), Role::Admin),
    ];

    for (username, password, role) in accounts {
        let password_hash = passwords
            .hash_blocking(password.to_string())
            .await
            .with_context(|| format!("Failed to hash seed password for '{}'", username))?;

        match repo
            .add(NewUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await
        {
            Ok(user) => tracing::info!("🔐 Seeded {} account '{}' (id {})", user.role, user.username, user.id),
            Err(StoreError::UsernameTaken(name)) => {
                tracing::info!("Seed account '{}' already present, skipping", name)
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::InMemoryUserStore;

    #[tokio::test]
    async fn test_seeds_user_then_admin() {
        let store = InMemoryUserStore::new();
        let passwords = PasswordService::new();
        let config = Config::for_tests();

        seed_default_users(&store, &passwords, &config.seed).await.unwrap();

        let user = store.find_by_username("user").await.unwrap();
        let admin = store.find_by_username("admin").await.unwrap();
        assert_eq!((user.id, user.role), (1, Role::User));
        assert_eq!((admin.id, admin.role), (2, Role::Admin));
        assert!(passwords.verify(&admin.password_hash, "admin123"));
    }

    #[tokio::test]
    async fn test_seeding_twice_is_harmless() {
        let store = InMemoryUserStore::new();
        let passwords = PasswordService::new();
        let config = Config::for_tests();

        seed_default_users(&store, &passwords, &config.seed).await.unwrap();
        seed_default_users(&store, &passwords, &config.seed).await.unwrap();

        assert_eq!(store.len(), 2);
    }
}
