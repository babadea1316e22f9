use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::models::PublicUser;
use crate::database::DatabaseManager;
use crate::services::{AccountService, Credentials};
use crate::state::AppState;

/// Fresh in-memory database with schema and seed challenges, one per test
pub struct TestContext {
    db: DatabaseManager,
    config: AppConfig,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        let mut config = AppConfig::development();
        config.database.url = "sqlite::memory:".to_string();

        let db = DatabaseManager::connect(&config.database)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open test database: {}", e))?;
        db.initialize().await?;
        db.seed_challenges().await?;

        Ok(Self { db, config })
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    /// Application state over this context's database
    pub fn state(&self) -> AppState {
        AppState::new(self.db.pool().clone(), Arc::new(self.config.clone()))
    }

    /// Register an account, panicking on failure
    pub async fn register(&self, email: &str, password: &str, name: &str) -> PublicUser {
        let credentials =
            Credentials::parse(Some(email.to_string()), Some(password.to_string())).unwrap();
        AccountService::new(self.pool().clone())
            .register(credentials, Some(name.to_string()))
            .await
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn contexts_are_isolated() {
        let first = TestContext::new().await.unwrap();
        let second = TestContext::new().await.unwrap();
        first.register("a@x.com", "pw", "Ann").await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(second.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
