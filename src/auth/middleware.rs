//! Authentication Middleware
//!
//! Axum middleware for JWT token validation and role gating.
//! Per request: unauthenticated -> authenticated -> authenticated admin,
//! stopping at whichever gate fails.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{jwt::JwtService, models::AuthUser};
use crate::database::Role;
use crate::errors::ApiError;

/// Authentication middleware that validates JWT tokens and injects user info
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Auth gate: requires a valid, unexpired token in the Authorization header
    pub async fn validate_token(
        State(jwt_service): State<Arc<JwtService>>,
        mut req: Request,
        next: Next,
    ) -> Result<Response, ApiError> {
        let token = extract_token(&req).ok_or_else(|| {
            tracing::warn!("[AuthMiddleware] {} {} without Authorization header", req.method(), req.uri());
            ApiError::MissingToken
        })?;

        let claims = jwt_service.validate_token(&token).map_err(|e| {
            tracing::warn!("[AuthMiddleware] JWT validation failed for {}: {:#}", req.uri(), e);
            ApiError::InvalidToken
        })?;

        let auth_user = AuthUser::from(claims);
        tracing::debug!("[AuthMiddleware] Authenticated {} ({})", auth_user.username, auth_user.role);

        // Insert the user into request extensions for downstream handlers
        req.extensions_mut().insert(auth_user);

        Ok(next.run(req).await)
    }

    /// Admin gate: must run after `validate_token`
    pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
        let is_admin = req.auth_user().is_some_and(|user| user.role == Role::Admin);
        if is_admin {
            return Ok(next.run(req).await);
        }

        if let Some(user) = req.auth_user() {
            tracing::warn!("[AuthMiddleware] {} denied admin route {}", user.username, req.uri());
        }
        Err(ApiError::Forbidden)
    }
}

/// The header carries the raw token; a `Bearer ` prefix is tolerated
fn extract_token(req: &Request) -> Option<String> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())?
        .trim_start();

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extension trait for extracting AuthUser from request
pub trait RequestAuthExt {
    fn auth_user(&self) -> Option<&AuthUser>;
}

impl RequestAuthExt for Request {
    fn auth_user(&self) -> Option<&AuthUser> {
        self.extensions().get::<AuthUser>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/profile");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_raw_token() {
        let req = request_with_auth(Some("abc.def.ghi"));
        assert_eq!(extract_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_tolerates_bearer_prefix() {
        let req = request_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_blank_header() {
        assert!(extract_token(&request_with_auth(None)).is_none());
        assert!(extract_token(&request_with_auth(Some("   "))).is_none());
        assert!(extract_token(&request_with_auth(Some("Bearer "))).is_none());
    }

    #[test]
    fn test_auth_user_extension() {
        let mut req = request_with_auth(None);
        assert!(req.auth_user().is_none());

        req.extensions_mut().insert(AuthUser {
            username: "admin".to_string(),
            role: Role::Admin,
        });
        assert_eq!(req.auth_user().unwrap().username, "admin");
    }
}
