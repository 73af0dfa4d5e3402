//! Authentication Models
//!
//! Data structures for authentication requests, responses, and user information.

use serde::{Deserialize, Serialize};

use crate::auth::jwt::Claims;
use crate::database::Role;

/// Authenticated identity extracted from a validated token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Credentials payload shared by registration and login.
/// Any other fields (id, role) sent by the client are ignored.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Token response after successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: String,
}
