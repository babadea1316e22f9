// handlers/admin/users.rs - User listing and deletion

use axum::extract::{Path, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};
use crate::services::{AdminService, AdminUser};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<AdminUser>,
}

pub async fn users_get(State(state): State<AppState>) -> ApiResult<UserList> {
    let users = AdminService::new(state.db.clone()).list_users().await?;
    Ok(ApiResponse::success(UserList { users }))
}

/// DELETE /api/admin/users/:id - remove the user, its profile, its surveys and its sessions
pub async fn user_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Message> {
    // A non-numeric id can name no user
    let user_id: i64 = id
        .parse()
        .map_err(|_| ApiError::not_found("User not found"))?;

    AdminService::new(state.db.clone())
        .delete_user(user_id)
        .await?;

    let revoked = state.sessions.revoke_user(user_id).await;
    if revoked > 0 {
        tracing::info!("Revoked {} sessions of deleted user {}", revoked, user_id);
    }

    Ok(ApiResponse::success(Message {
        message: "User deleted successfully",
    }))
}
