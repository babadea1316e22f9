// handlers/admin/stats.rs - GET /api/admin/stats handler

use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AdminService, AdminStats};
use crate::state::AppState;

pub async fn stats_get(State(state): State<AppState>) -> ApiResult<AdminStats> {
    let stats = AdminService::new(state.db.clone()).stats().await?;
    Ok(ApiResponse::success(stats))
}
