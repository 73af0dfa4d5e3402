//! Admin-only listings. Both routes sit behind the auth and admin gates.

use axum::{Json, extract::State};

use crate::database::{User, WarehouseManager, models::warehouse_managers};
use crate::server::AppState;

/// `GET /admin/users`
///
/// Returns every account; password hashes are excluded by `User`'s serializer.
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    let users = app_state.users.list().await;
    tracing::info!("GetAllUsers called. Number of users: {}", users.len());
    Json(users)
}

/// `GET /admin/warehousemanagers`
pub async fn list_warehouse_managers() -> Json<Vec<WarehouseManager>> {
    let managers = warehouse_managers();
    tracing::info!("GetAllWarehouseManagers called. Number of warehouse managers: {}", managers.len());
    Json(managers)
}
