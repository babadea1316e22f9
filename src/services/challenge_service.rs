use sqlx::SqlitePool;

use crate::database::models::Challenge;
use crate::database::DatabaseError;

pub struct ChallengeService {
    pool: SqlitePool,
}

impl ChallengeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Challenge>, DatabaseError> {
        let challenges = sqlx::query_as::<_, Challenge>(
            "SELECT id, title, company, domain, difficulty, deadline, status
             FROM challenges ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(challenges)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM challenges")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
