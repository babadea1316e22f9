// handlers/admin/surveys.rs - GET /api/admin/surveys handler

use axum::extract::State;
use serde::Serialize;

use crate::database::models::AdminSurvey;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::SurveyService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SurveyList {
    pub surveys: Vec<AdminSurvey>,
}

pub async fn surveys_get(State(state): State<AppState>) -> ApiResult<SurveyList> {
    let surveys = SurveyService::new(state.db.clone())
        .list_with_emails()
        .await?;
    Ok(ApiResponse::success(SurveyList { surveys }))
}
