// handlers/public/auth/logout.rs - POST /api/logout handler

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue},
    Extension,
};

use crate::error::ApiError;
use crate::middleware::{expired_session_cookie, ApiResponse, Message, SessionContext};
use crate::state::AppState;

/// Drop the current session, if any. Always succeeds.
pub async fn logout_post(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<([(HeaderName, HeaderValue); 1], ApiResponse<Message>), ApiError> {
    if let Some(token) = ctx.token.as_deref() {
        if let Some(session) = state.sessions.destroy(token).await {
            tracing::info!("User {} logged out", session.user_id);
        }
    }

    let cookie = expired_session_cookie(&state.config.security)?;
    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiResponse::success(Message {
            message: "Logged out successfully",
        }),
    ))
}
