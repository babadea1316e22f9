use sqlx::SqlitePool;

use crate::database::models::{Profile, ProfileUpdate};
use crate::database::DatabaseError;

const PROFILE_COLUMNS: &str =
    "id, user_id, skill_readiness, verified_skills, total_xp, certifications";

pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Option<Profile>, DatabaseError> {
        let sql = format!("SELECT {} FROM profiles WHERE user_id = ?", PROFILE_COLUMNS);
        let profile = sqlx::query_as::<_, Profile>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    /// Create the profile if missing, then overwrite only the supplied fields
    pub async fn upsert(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<Profile, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query(
            "INSERT INTO profiles (user_id) VALUES (?) ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await;

        if let Err(e) = created {
            if is_foreign_key_violation(&e) {
                return Err(DatabaseError::NotFound("User not found".to_string()));
            }
            return Err(e.into());
        }

        sqlx::query(
            "UPDATE profiles SET
                skill_readiness = COALESCE(?, skill_readiness),
                verified_skills = COALESCE(?, verified_skills),
                total_xp        = COALESCE(?, total_xp),
                certifications  = COALESCE(?, certifications)
             WHERE user_id = ?",
        )
        .bind(update.skill_readiness)
        .bind(update.verified_skills)
        .bind(update.total_xp)
        .bind(update.certifications)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let sql = format!("SELECT {} FROM profiles WHERE user_id = ?", PROFILE_COLUMNS);
        let profile = sqlx::query_as::<_, Profile>(&sql)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(profile)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db_err| db_err.is_foreign_key_violation())
}
