use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::database::models::{MaybeStats, ProfileStats, PublicUser};
use crate::database::DatabaseError;
use crate::services::{ChallengeService, SurveyService};

/// A user with its profile metrics for the admin console
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub profile: MaybeStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_surveys: i64,
    pub total_challenges: i64,
    pub avg_skill_readiness: f64,
}

#[derive(FromRow)]
struct UserProfileRow {
    id: i64,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
    profile_id: Option<i64>,
    skill_readiness: Option<i64>,
    verified_skills: Option<i64>,
    total_xp: Option<i64>,
    certifications: Option<i64>,
}

impl From<UserProfileRow> for AdminUser {
    fn from(row: UserProfileRow) -> Self {
        let profile = row.profile_id.map(|_| ProfileStats {
            skill_readiness: row.skill_readiness.unwrap_or_default(),
            verified_skills: row.verified_skills.unwrap_or_default(),
            total_xp: row.total_xp.unwrap_or_default(),
            certifications: row.certifications.unwrap_or_default(),
        });

        AdminUser {
            user: PublicUser {
                id: row.id,
                email: row.email,
                name: row.name,
                created_at: row.created_at,
            },
            profile: MaybeStats(profile),
        }
    }
}

pub struct AdminService {
    pool: SqlitePool,
}

impl AdminService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, DatabaseError> {
        let rows = sqlx::query_as::<_, UserProfileRow>(
            "SELECT u.id, u.email, u.name, u.created_at,
                    p.id AS profile_id, p.skill_readiness, p.verified_skills,
                    p.total_xp, p.certifications
             FROM users u
             LEFT JOIN profiles p ON p.user_id = u.id
             ORDER BY u.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminUser::from).collect())
    }

    pub async fn stats(&self) -> Result<AdminStats, DatabaseError> {
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        let total_surveys = SurveyService::new(self.pool.clone()).count().await?;
        let total_challenges = ChallengeService::new(self.pool.clone()).count().await?;
        let average: Option<f64> = sqlx::query_scalar("SELECT AVG(skill_readiness) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(AdminStats {
            total_users,
            total_surveys,
            total_challenges,
            avg_skill_readiness: round_to_tenth(average.unwrap_or(0.0)),
        })
    }

    /// Delete the user together with its profile and survey responses
    pub async fn delete_user(&self, user_id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM survey_responses WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("User not found".to_string()));
        }

        tx.commit().await?;
        info!("Deleted user {}", user_id);
        Ok(())
    }
}

/// One decimal place, ties to even on the exact binary value (75.25 -> 75.2)
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
