// handlers/protected/profile.rs - PUT /api/update-profile handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::api::JsonBody;
use crate::database::models::{ProfileStats, ProfileUpdate};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, SessionContext};
use crate::services::ProfileService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileUpdated {
    pub message: &'static str,
    pub profile: ProfileStats,
}

/// Overwrite only the metrics present in the body. Values are stored as given.
pub async fn update_profile_put(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    body: Result<JsonBody<ProfileUpdate>, ApiError>,
) -> ApiResult<ProfileUpdated> {
    let session = ctx.require("Not authenticated")?;
    let JsonBody(update) = body?;

    let profile = ProfileService::new(state.db.clone())
        .upsert(session.user_id, &update)
        .await?;

    Ok(ApiResponse::success(ProfileUpdated {
        message: "Profile updated successfully",
        profile: profile.stats(),
    }))
}
