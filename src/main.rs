//! # Warehouse Auth Server
//!
//! Username/password registration and login with Argon2 password hashing,
//! JWT session tokens, and role-gated admin routes, built with Axum and Tokio.
//!
//! ## Architecture
//! - `server`: application state, router wiring, CORS, server lifecycle
//! - `config`: environment variable configuration
//! - `auth`: password hashing, JWT service, auth/admin middleware
//! - `database`: credential store trait, in-memory backend, startup seeding
//! - `routes`: HTTP handlers
//! - `errors`: JSON error responses
//!
//! ## Routes
//! | Method | Path | Gate |
//! |---|---|---|
//! | POST | `/register` | none |
//! | POST | `/login` | none |
//! | GET | `/profile` | token |
//! | GET | `/admin/users` | token + admin |
//! | GET | `/admin/warehousemanagers` | token + admin |
//! | OPTIONS | `/profile`, `/users`, `/warehousemanagers` | none |
//!
//! ## Running the Server
//! ```bash
//! JWT_SECRET=change-me cargo run
//! ```
//!
//! The server listens on `http://0.0.0.0:8080` by default. Users are kept in
//! memory and reset on restart; `user` and `admin` are seeded at startup.

mod auth;
mod config;
mod database;
mod errors;
mod routes;
mod server;

use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt, EnvFilter };

/// Application entry point.
///
/// Loads `.env`, initializes logging, reads configuration and runs the
/// server until Ctrl+C. Startup failures are logged and exit non-zero.
#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development
    dotenv::dotenv().ok();

    tracing_subscriber
        ::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt
                ::layer()
                .with_target(false)
                .compact()
        )
        .init();

    tracing::info!("🏁 Starting auth server...");
    tracing::info!("📦 Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    tracing::info!("🏗️  Build profile: {}", if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    });

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start(config).await {
        tracing::error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}
