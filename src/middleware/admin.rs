use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Guards `/api/admin/*` with a bearer token when `ADMIN_TOKEN` is configured.
/// Without a configured token the routes stay open.
pub async fn admin_token_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config.security.admin_token.as_deref() else {
        return next.run(request).await;
    };

    let rejection = match extract_bearer_token(request.headers()) {
        Ok(token) if token == expected => None,
        Ok(_) => Some("Invalid admin token"),
        Err(msg) => Some(msg),
    };

    match rejection {
        None => next.run(request).await,
        Some(msg) => {
            tracing::warn!("Rejected admin request to {}: {}", request.uri().path(), msg);
            ApiError::unauthorized(msg).into_response()
        }
    }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty admin token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(extract_bearer_token(&with_auth("Bearer s3cret")), Ok("s3cret"));
    }

    #[test]
    fn malformed_headers_are_rejected() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            Err("Missing Authorization header")
        );
        assert_eq!(extract_bearer_token(&with_auth("Bearer  ")), Err("Empty admin token"));
        assert_eq!(
            extract_bearer_token(&with_auth("Basic abc")),
            Err("Authorization header must use Bearer token format")
        );
    }
}
