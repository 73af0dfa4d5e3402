// # Routes Module
//
// - HTTP route handlers, grouped by functionality.
// - Wiring (paths, gates, CORS) lives in `server.rs`.

/// Health check endpoint
pub mod health;

/// Registration and login
pub mod auth;

/// Authenticated user's profile
pub mod profile;

/// Admin-only listings
pub mod admin;

/// Unauthenticated OPTIONS responses for protected paths
pub mod preflight;
