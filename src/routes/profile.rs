use axum::{Extension, Json};

use crate::auth::models::{AuthUser, ProfileResponse};

/// `GET /profile`: echoes the authenticated username
pub async fn get_profile(Extension(user): Extension<AuthUser>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "Profile accessed".to_string(),
        user: user.username,
    })
}
