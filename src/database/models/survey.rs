use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SurveyResponse {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub question_1: Option<String>,
    pub question_2: Option<String>,
    pub question_3: Option<String>,
    pub question_4: Option<String>,
    pub question_5: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// Career test answers keyed by question number ("1".."5")
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SurveyAnswers {
    #[serde(rename = "1")]
    pub question_1: Option<String>,
    #[serde(rename = "2")]
    pub question_2: Option<String>,
    #[serde(rename = "3")]
    pub question_3: Option<String>,
    #[serde(rename = "4")]
    pub question_4: Option<String>,
    #[serde(rename = "5")]
    pub question_5: Option<String>,
}

/// Survey row joined with the submitter's email for the admin console
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AdminSurvey {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub survey: SurveyResponse,
    pub user_email: String,
}
