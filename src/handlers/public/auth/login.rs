// handlers/public/auth/login.rs - POST /api/login handler

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue},
    Extension,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::JsonBody;
use crate::database::models::PublicUser;
use crate::error::ApiError;
use crate::middleware::{session_cookie, ApiResponse, SessionContext};
use crate::services::{AccountService, Credentials};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/**
 * POST /api/login - Verify credentials and start a server-side session
 *
 * The session token travels back in an HttpOnly cookie. With `rememberMe`
 * the cookie carries a Max-Age matching the extended session lifetime,
 * otherwise it lasts for the browser session.
 */
pub async fn login_post(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], ApiResponse<LoginResponse>), ApiError> {
    let remember_me = request.remember_me.unwrap_or(false);
    let credentials = Credentials::parse(request.email, request.password)?;
    let user = AccountService::new(state.db.clone())
        .authenticate(credentials)
        .await?;

    // Logging in again replaces whatever session the browser held
    if let Some(previous) = ctx.token.as_deref() {
        state.sessions.destroy(previous).await;
    }

    let (token, _session) = state
        .sessions
        .create(user.id, &user.email, remember_me)
        .await;

    let max_age = remember_me.then(|| state.sessions.ttl(true).num_seconds());
    let cookie = session_cookie(&state.config.security, &token, max_age)?;

    info!(
        "User {} logged in (remember_me: {})",
        user.id, remember_me
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiResponse::success(LoginResponse {
            message: "Login successful",
            user: user.to_public(),
        }),
    ))
}
