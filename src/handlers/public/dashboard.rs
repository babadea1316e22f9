// handlers/public/dashboard.rs - GET /api/dashboard-data handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::database::models::{Challenge, MaybeStats, ProfileStats, PublicUser};
use crate::middleware::{ApiResponse, ApiResult, SessionContext};
use crate::services::{AccountService, ChallengeService, ProfileService};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub user: Option<PublicUser>,
    pub stats: MaybeStats,
    pub challenges: Vec<Challenge>,
}

/// Signed-in users get their own stats. Anonymous visitors, or a session
/// whose user has since been deleted, get the placeholder block.
pub async fn dashboard_data_get(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> ApiResult<DashboardData> {
    let challenges = ChallengeService::new(state.db.clone()).list_all().await?;

    let user = match ctx.user_id() {
        Some(user_id) => AccountService::new(state.db.clone())
            .find_by_id(user_id)
            .await?,
        None => None,
    };

    let Some(user) = user else {
        return Ok(ApiResponse::success(DashboardData {
            user: None,
            stats: MaybeStats(Some(ProfileStats::PLACEHOLDER)),
            challenges,
        }));
    };

    let profile = ProfileService::new(state.db.clone())
        .find_by_user(user.id)
        .await?;

    Ok(ApiResponse::success(DashboardData {
        user: Some(user.to_public()),
        stats: profile.map(|p| p.stats()).into(),
        challenges,
    }))
}
