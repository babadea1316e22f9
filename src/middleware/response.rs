use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Wrapper for API responses that adds `"success": true` next to the payload fields
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            status_code: Some(status_code),
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to serialize response data"
                    })),
                )
                    .into_response();
            }
        };

        // Object payloads are flattened into the envelope, anything else goes under "data"
        let mut envelope = Map::new();
        envelope.insert("success".to_string(), Value::Bool(true));
        match data_value {
            Value::Object(fields) => envelope.extend(fields),
            Value::Null => {}
            other => {
                envelope.insert("data".to_string(), other);
            }
        }

        (status, Json(Value::Object(envelope))).into_response()
    }
}

/// Payload carrying only a human-readable message
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        count: u32,
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn object_payload_is_flattened() {
        let response = ApiResponse::created(Payload { count: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({ "success": true, "count": 3 }));
    }

    #[tokio::test]
    async fn scalar_payload_goes_under_data() {
        let response = ApiResponse::success(vec![1, 2]).into_response();
        assert_eq!(body_json(response).await, json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn default_status_is_ok() {
        let response = ApiResponse::success(Message { message: "ok" }).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
