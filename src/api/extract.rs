use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejections render as the API error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
