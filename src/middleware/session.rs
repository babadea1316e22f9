use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use axum_extra::{headers::Cookie, TypedHeader};

use crate::auth::Session;
use crate::config::SecurityConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Session resolved for the current request, attached by `session_context_middleware`
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    pub token: Option<String>,
    pub session: Option<Session>,
}

impl SessionContext {
    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }

    /// The live session, or an AuthError carrying `message`
    pub fn require(&self, message: &str) -> Result<&Session, ApiError> {
        self.session
            .as_ref()
            .ok_or_else(|| ApiError::unauthorized(message))
    }
}

/// Resolves the session cookie into a `SessionContext` request extension.
/// A missing or stale cookie yields an empty context, never an error.
pub async fn session_context_middleware(
    State(state): State<AppState>,
    cookie: Option<TypedHeader<Cookie>>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = &state.config.security.session_cookie_name;
    let token = session_token(cookie.as_ref().map(|TypedHeader(c)| c), cookie_name);

    let session = match token.as_deref() {
        Some(token) => state.sessions.resolve(token).await,
        None => None,
    };

    if let Some(session) = &session {
        tracing::debug!("Request bound to session of user {}", session.user_id);
    }

    request
        .extensions_mut()
        .insert(SessionContext { token, session });

    next.run(request).await
}

/// The named session token from a parsed Cookie header, if present and non-empty
pub fn session_token(cookie: Option<&Cookie>, cookie_name: &str) -> Option<String> {
    cookie
        .and_then(|cookie| cookie.get(cookie_name))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Set-Cookie value for a new session. Remember-me sessions persist across browser
/// restarts, the others are browser-session cookies.
pub fn session_cookie(
    security: &SecurityConfig,
    token: &str,
    max_age_secs: Option<i64>,
) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        security.session_cookie_name, token
    );
    if let Some(max_age) = max_age_secs {
        cookie.push_str(&format!("; Max-Age={}", max_age));
    }
    if security.secure_cookie {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|_| ApiError::internal_server_error("Failed to build session cookie"))
}

/// Set-Cookie value that makes the browser drop the session cookie
pub fn expired_session_cookie(security: &SecurityConfig) -> Result<HeaderValue, ApiError> {
    session_cookie(security, "", Some(0))
}
