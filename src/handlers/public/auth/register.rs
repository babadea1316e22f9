// handlers/public/auth/register.rs - POST /api/register handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::database::models::PublicUser;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AccountService, Credentials};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// Create an account with a zeroed profile. Does not log the user in.
pub async fn register_post(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    let credentials = Credentials::parse(request.email, request.password)?;
    let user = AccountService::new(state.db.clone())
        .register(credentials, request.name)
        .await?;

    Ok(ApiResponse::created(RegisterResponse {
        message: "Registration successful",
        user,
    }))
}
