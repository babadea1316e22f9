use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{AdminSurvey, SurveyAnswers, SurveyResponse};
use crate::database::DatabaseError;

pub struct SurveyService {
    pool: SqlitePool,
}

impl SurveyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a new response; earlier submissions by the same user are kept
    pub async fn submit(
        &self,
        user_id: i64,
        answers: SurveyAnswers,
    ) -> Result<SurveyResponse, DatabaseError> {
        let completed_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO survey_responses
                (user_id, question_1, question_2, question_3, question_4, question_5, completed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(&answers.question_1)
        .bind(&answers.question_2)
        .bind(&answers.question_3)
        .bind(&answers.question_4)
        .bind(&answers.question_5)
        .bind(completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                DatabaseError::NotFound("User not found".to_string())
            }
            _ => DatabaseError::Sqlx(e),
        })?;

        Ok(SurveyResponse {
            id: result.last_insert_rowid(),
            user_id,
            question_1: answers.question_1,
            question_2: answers.question_2,
            question_3: answers.question_3,
            question_4: answers.question_4,
            question_5: answers.question_5,
            completed_at,
        })
    }

    /// Every response with its submitter's email, "Unknown" when the user row is gone
    pub async fn list_with_emails(&self) -> Result<Vec<AdminSurvey>, DatabaseError> {
        let surveys = sqlx::query_as::<_, AdminSurvey>(
            "SELECT s.id, s.user_id, s.question_1, s.question_2, s.question_3,
                    s.question_4, s.question_5, s.completed_at,
                    COALESCE(u.email, 'Unknown') AS user_email
             FROM survey_responses s
             LEFT JOIN users u ON u.id = s.user_id
             ORDER BY s.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(surveys)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM survey_responses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestContext;

    #[tokio::test]
    async fn missing_answers_are_stored_as_null() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.register("a@x.com", "pw", "Ann").await;
        let surveys = SurveyService::new(ctx.pool().clone());

        let answers = SurveyAnswers {
            question_1: Some("x".to_string()),
            ..Default::default()
        };
        let survey = surveys.submit(user.id, answers).await.unwrap();
        assert_eq!(survey.question_1.as_deref(), Some("x"));
        assert!(survey.question_2.is_none());
        assert!(survey.question_5.is_none());

        let listed = surveys.list_with_emails().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].survey.id, survey.id);
        assert_eq!(listed[0].survey.question_1.as_deref(), Some("x"));
        assert!(listed[0].survey.question_4.is_none());
        assert_eq!(listed[0].user_email, "a@x.com");
    }

    #[tokio::test]
    async fn repeat_submissions_are_appended() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.register("a@x.com", "pw", "Ann").await;
        let surveys = SurveyService::new(ctx.pool().clone());

        let first = surveys.submit(user.id, SurveyAnswers::default()).await.unwrap();
        let second = surveys.submit(user.id, SurveyAnswers::default()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(surveys.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn orphaned_survey_reports_unknown_email() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.register("a@x.com", "pw", "Ann").await;
        let surveys = SurveyService::new(ctx.pool().clone());
        surveys.submit(user.id, SurveyAnswers::default()).await.unwrap();

        let mut conn = ctx.pool().acquire().await.unwrap();
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user.id)
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await
            .unwrap();
        drop(conn);

        let listed = surveys.list_with_emails().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_email, "Unknown");
    }
}
