//! Configuration module for environment variables and application settings

use std::env;
use anyhow::{Result, anyhow};

const DEV_JWT_SECRET: &str = "dev_secret";

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared HMAC secret used to sign and verify session tokens
    pub jwt_secret: String,

    /// Session token lifetime in hours
    pub token_ttl_hours: i64,

    /// Server configuration
    pub server: ServerConfig,

    /// Passwords for the accounts seeded into the credential store at startup
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Frontend origin allowed by the CORS policy
    pub allowed_origin: String,
}

#[derive(Clone)]
pub struct SeedConfig {
    pub user_password: String,
    pub admin_password: String,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("user_password", &"<redacted>")
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                tracing::warn!("⚠️  JWT_SECRET not set, using development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let token_ttl_hours: i64 = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| anyhow!("TOKEN_TTL_HOURS must be an integer number of hours"))?;
        if token_ttl_hours <= 0 {
            return Err(anyhow!("TOKEN_TTL_HOURS must be positive"));
        }

        // PORT takes precedence so the server runs unchanged on PaaS hosts
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| anyhow!("SERVER_PORT must be a valid port number"))?;

        Ok(Self {
            jwt_secret,
            token_ttl_hours,

            server: ServerConfig {
                host: env::var("SERVER_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },

            seed: SeedConfig {
                user_password: env::var("SEED_USER_PASSWORD")
                    .unwrap_or_else(|_| "user123".to_string()),
                admin_password: env::var("SEED_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "admin123".to_string()),
            },
        })
    }

    /// Configuration used by tests: fixed secret, default TTL, known seed passwords
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            jwt_secret: "test_secret".to_string(),
            token_ttl_hours: 24,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                allowed_origin: "http://localhost:3000".to_string(),
            },
            seed: SeedConfig {
                user_password: "user123".to_string(),
                admin_password: "admin123".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_passwords_are_redacted_in_debug() {
        let config = Config::for_tests();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("<redacted>"));
    }
}
