use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entry; difficulty and status are free-form labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub company: Option<String>,
    pub domain: Option<String>,
    pub difficulty: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}
