// handlers/admin/challenges.rs - GET /api/admin/challenges handler

use axum::extract::State;
use serde::Serialize;

use crate::database::models::Challenge;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::ChallengeService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChallengeList {
    pub challenges: Vec<Challenge>,
}

pub async fn challenges_get(State(state): State<AppState>) -> ApiResult<ChallengeList> {
    let challenges = ChallengeService::new(state.db.clone()).list_all().await?;
    Ok(ApiResponse::success(ChallengeList { challenges }))
}
