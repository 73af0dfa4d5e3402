//! # Authentication Module
//!
//! Password hashing, JWT issuance and validation, and the middleware that
//! gates authenticated and admin-only routes.

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthMiddleware;
pub use models::AuthUser;
pub use password::PasswordService;
