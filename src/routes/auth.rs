//! Auth routes for registration and login

use axum::{Json, extract::{State, rejection::JsonRejection}, http::StatusCode, response::IntoResponse};

use crate::auth::models::{CredentialsRequest, LoginResponse, MessageResponse};
use crate::database::{NewUser, Role};
use crate::errors::ApiError;
use crate::server::AppState;

/// `POST /register`
///
/// Self-registered accounts always get the `user` role; any role in the body is ignored.
pub async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let password_hash = app_state
        .passwords
        .hash_blocking(payload.password)
        .await
        .map_err(|e| {
            tracing::error!("Password hashing failed: {:#}", e);
            ApiError::Internal("Could not hash password")
        })?;

    let user = app_state
        .users
        .add(NewUser {
            username: payload.username,
            password_hash,
            role: Role::User,
        })
        .await
        .map_err(|e| {
            tracing::info!("Registration rejected: {}", e);
            ApiError::from(e)
        })?;

    tracing::info!("Registered user '{}' with id {}", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// `POST /login`
///
/// Unknown usernames and wrong passwords produce the same 401 body.
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;

    let Some(user) = app_state.users.find_by_username(&payload.username).await else {
        tracing::info!("Login failed: unknown user");
        return Err(ApiError::InvalidCredentials);
    };

    if !app_state
        .passwords
        .verify_blocking(user.password_hash.clone(), payload.password)
        .await
    {
        tracing::info!("Login failed for '{}'", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = app_state
        .jwt_service
        .create_token(&user.username, user.role)
        .map_err(|e| {
            tracing::error!("Token generation failed: {:#}", e);
            ApiError::Internal("Could not generate token")
        })?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
    }))
}
