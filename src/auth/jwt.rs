//! JWT Token Service
//!
//! Handles JWT creation, validation, and claims management for user sessions.
//! Tokens are HS256-signed with a shared secret and are never stored server-side.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::database::Role;

/// JWT Claims structure containing user information and token metadata
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub username: String,
    pub role: Role,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

/// JWT Service for token operations
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtService {
    /// Create a new JWT service with the provided secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Default validation pins HS256 and checks `exp`; no grace period
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            ttl,
        }
    }

    /// Generate a token for a user
    pub fn create_token(&self, username: &str, role: Role) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .context("Failed to encode JWT token")
    }

    /// Validate a token's signature, structure and expiry and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .context("Failed to validate JWT token")
    }

    /// Sign arbitrary claims; lets tests mint already-expired tokens
    #[cfg(test)]
    pub fn create_token_with_claims(&self, claims: &Claims) -> Result<String> {
        self.encode_claims(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret", Duration::hours(24))
    }

    #[test]
    fn test_jwt_roundtrip() {
        let jwt_service = service();

        let token = jwt_service.create_token("alice", Role::User).unwrap();
        let claims = jwt_service.validate_token(&token).unwrap();

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt_service = service();
        let issued = Utc::now() - Duration::hours(25);
        let claims = Claims {
            username: "alice".to_string(),
            role: Role::User,
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(24)).timestamp(),
        };

        let token = jwt_service.create_token_with_claims(&claims).unwrap();
        assert!(jwt_service.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().create_token("admin", Role::Admin).unwrap();
        let other = JwtService::new("another_secret", Duration::hours(24));

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_malformed_and_tampered_tokens_are_rejected() {
        let jwt_service = service();
        assert!(jwt_service.validate_token("not.a.token").is_err());
        assert!(jwt_service.validate_token("").is_err());

        let token = jwt_service.create_token("alice", Role::User).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = service()
            .create_token("alice", Role::Admin)
            .unwrap()
            .split('.')
            .nth(1)
            .unwrap()
            .to_string();
        parts[1] = &forged_payload;
        // Payload swapped from a different token invalidates the signature
        let tampered = parts.join(".");
        assert!(jwt_service.validate_token(&tampered).is_err());
    }
}
