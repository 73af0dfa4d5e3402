//! # Server Module
//!
//! HTTP server setup and route configuration.

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, options, post},
};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::auth::{AuthMiddleware, JwtService, PasswordService};
use crate::config::Config;
use crate::database::{InMemoryUserStore, UserRepository, seed::seed_default_users};
use crate::routes::{admin, auth, health::ping, preflight::preflight, profile};

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub jwt_service: Arc<JwtService>,
    pub passwords: PasswordService,
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Build services from configuration and seed the default accounts
    pub async fn from_config(config: &Config) -> Result<Self> {
        let allowed_origin = config
            .server
            .allowed_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin '{}'", config.server.allowed_origin))?;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            chrono::Duration::hours(config.token_ttl_hours),
        ));
        let passwords = PasswordService::new();

        let store = Arc::new(InMemoryUserStore::new());
        seed_default_users(store.as_ref(), &passwords, &config.seed).await?;
        tracing::info!("🗄️  Credential store ready with {} users (in-memory)", store.len());

        Ok(Self {
            users: store,
            jwt_service,
            passwords,
            allowed_origin,
        })
    }
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}

/// Build the application router.
///
/// The auth gate is attached per method with `route_layer`, so only the GET
/// handlers are protected. Admin routes add the role gate inside the auth gate.
pub fn build_router(state: AppState) -> Router {
    let auth_gate = middleware::from_fn_with_state(
        state.jwt_service.clone(),
        AuthMiddleware::validate_token,
    );
    let admin_gate = middleware::from_fn(AuthMiddleware::require_admin);

    let api = Router::new()
        .route("/ping", get(ping))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/profile",
            get(profile::get_profile).route_layer(auth_gate.clone()),
        )
        .route(
            "/admin/users",
            get(admin::list_users)
                .route_layer(admin_gate.clone())
                .route_layer(auth_gate.clone()),
        )
        .route(
            "/admin/warehousemanagers",
            get(admin::list_warehouse_managers)
                .route_layer(admin_gate)
                .route_layer(auth_gate),
        )
        .layer(ServiceBuilder::new().layer(cors_layer(state.allowed_origin.clone())));

    // Added after the CORS layer so OPTIONS reaches the preflight handler
    // instead of being answered by CorsLayer
    let preflight_routes = Router::new()
        .route("/profile", options(preflight))
        .route("/users", options(preflight))
        .route("/warehousemanagers", options(preflight))
        .route("/admin/users", options(preflight))
        .route("/admin/warehousemanagers", options(preflight));

    api.merge(preflight_routes).with_state(state)
}

/// Starts the HTTP server and serves until Ctrl+C.
pub async fn start(config: Config) -> Result<()> {
    let state = AppState::from_config(&config).await?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} - port may already be in use", addr))?;

    tracing::info!("🚀 Auth server starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🏥 Health check available at http://{}/ping", addr);
    tracing::info!("🔑 Auth endpoints: POST /register, POST /login, GET /profile");
    tracing::info!("🛡️  Admin endpoints: GET /admin/users, GET /admin/warehousemanagers");
    tracing::info!("🌐 CORS origin: {}", config.server.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
