// handlers/mod.rs - Handler tiers
//
// Public (no session needed) → Protected (session required) → Admin (optional bearer token)
pub mod admin;
pub mod protected;
pub mod public;

use crate::error::ApiError;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Resource not found")
}
