// handlers/protected/survey.rs - POST /api/submit-survey handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::api::JsonBody;
use crate::database::models::{SurveyAnswers, SurveyResponse};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, SessionContext};
use crate::services::SurveyService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SurveySubmitted {
    pub message: &'static str,
    pub survey: SurveyResponse,
}

pub async fn submit_survey_post(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    body: Result<JsonBody<SurveyAnswers>, ApiError>,
) -> ApiResult<SurveySubmitted> {
    // Session first: an anonymous caller gets 401 whatever the body holds
    let session = ctx.require("Please log in to submit survey")?;
    let JsonBody(answers) = body?;

    let survey = SurveyService::new(state.db.clone())
        .submit(session.user_id, answers)
        .await?;

    tracing::info!("User {} submitted survey {}", session.user_id, survey.id);

    Ok(ApiResponse::created(SurveySubmitted {
        message: "Survey submitted successfully",
        survey,
    }))
}
