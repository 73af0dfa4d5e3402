use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::server::AppState;

/// Explicit `OPTIONS` answer for the protected paths.
///
/// Registered without the auth gate so browsers can preflight before they
/// hold a token.
pub async fn preflight(State(app_state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, app_state.allowed_origin.clone()),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                header::HeaderValue::from_static("Content-Type, Authorization"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                header::HeaderValue::from_static("GET, OPTIONS"),
            ),
        ],
    )
}
