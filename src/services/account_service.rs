use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::{hash_password, verify_password};
use crate::database::models::{PublicUser, User};
use crate::database::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        AccountError::Database(err.into())
    }
}

/// Email/password pair that passed the presence check
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Both fields must be present and non-empty
    pub fn parse(email: Option<String>, password: Option<String>) -> Result<Self, AccountError> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Self { email, password })
            }
            _ => Err(AccountError::MissingCredentials),
        }
    }
}

pub struct AccountService {
    pool: SqlitePool,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user and its zeroed profile in one transaction
    pub async fn register(
        &self,
        credentials: Credentials,
        name: Option<String>,
    ) -> Result<PublicUser, AccountError> {
        if self.find_by_email(&credentials.email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_password(credentials.password).await?;
        let name = name.unwrap_or_default();
        let created_at = Utc::now();

        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO users (email, password_hash, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&credentials.email)
        .bind(&password_hash)
        .bind(&name)
        .bind(created_at)
        .execute(&mut *tx)
        .await;

        // A concurrent registration can slip past the lookup above
        let user_id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => return Err(AccountError::EmailTaken),
            Err(e) => return Err(e.into()),
        };

        sqlx::query("INSERT INTO profiles (user_id) VALUES (?)")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Registered user {} ({})", user_id, credentials.email);
        Ok(PublicUser {
            id: user_id,
            email: credentials.email,
            name,
            created_at,
        })
    }

    /// Check the password against the stored hash
    pub async fn authenticate(&self, credentials: Credentials) -> Result<User, AccountError> {
        let Some(user) = self.find_by_email(&credentials.email).await? else {
            warn!("Login failed: unknown email {}", credentials.email);
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(credentials.password, user.password_hash.clone()).await {
            warn!("Login failed: wrong password for user {}", user.id);
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, name, created_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, name, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestContext;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials::parse(Some(email.to_string()), Some(password.to_string())).unwrap()
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(matches!(
            Credentials::parse(None, Some("pw".to_string())),
            Err(AccountError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::parse(Some("a@x.com".to_string()), None),
            Err(AccountError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::parse(Some(String::new()), Some("pw".to_string())),
            Err(AccountError::MissingCredentials)
        ));
        assert!(Credentials::parse(Some("a@x.com".to_string()), Some("pw".to_string())).is_ok());
    }

    #[tokio::test]
    async fn register_creates_user_with_zeroed_profile() {
        let ctx = TestContext::new().await.unwrap();
        let accounts = AccountService::new(ctx.pool().clone());

        let user = accounts
            .register(creds("a@x.com", "pw"), Some("Ann".to_string()))
            .await
            .unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "Ann");

        let profiles: Vec<(i64, i64, i64, i64)> = sqlx::query_as(
            "SELECT skill_readiness, verified_skills, total_xp, certifications
             FROM profiles WHERE user_id = ?",
        )
        .bind(user.id)
        .fetch_all(ctx.pool())
        .await
        .unwrap();
        assert_eq!(profiles, vec![(0, 0, 0, 0)]);
    }

    #[tokio::test]
    async fn register_stores_hash_not_password() {
        let ctx = TestContext::new().await.unwrap();
        let accounts = AccountService::new(ctx.pool().clone());
        accounts.register(creds("a@x.com", "pw"), None).await.unwrap();

        let stored = accounts.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw");
        assert!(stored.password_hash.starts_with("$argon2"));
        assert_eq!(stored.name, "");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_second_user() {
        let ctx = TestContext::new().await.unwrap();
        let accounts = AccountService::new(ctx.pool().clone());
        accounts.register(creds("a@x.com", "pw"), None).await.unwrap();

        let second = accounts.register(creds("a@x.com", "other"), None).await;
        assert!(matches!(second, Err(AccountError::EmailTaken)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(ctx.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let ctx = TestContext::new().await.unwrap();
        let accounts = AccountService::new(ctx.pool().clone());
        let registered = accounts.register(creds("a@x.com", "pw"), None).await.unwrap();

        let user = accounts.authenticate(creds("a@x.com", "pw")).await.unwrap();
        assert_eq!(user.id, registered.id);

        assert!(matches!(
            accounts.authenticate(creds("a@x.com", "nope")).await,
            Err(AccountError::InvalidCredentials)
        ));
        assert!(matches!(
            accounts.authenticate(creds("b@x.com", "pw")).await,
            Err(AccountError::InvalidCredentials)
        ));
    }
}
