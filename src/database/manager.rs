use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::schema::{SCHEMA, SEED_CHALLENGES};

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owns the SQLite pool and the schema lifecycle
#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Open the pool described by `config`, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options =
            SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(config.connection_timeout));

        // Each connection to an in-memory database sees its own empty database,
        // so the pool is pinned to one connection that never gets recycled.
        let pool_options = if Self::is_in_memory(&config.url) {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(DatabaseError::Connection)?;

        info!("Opened database pool for: {}", config.url);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes that do not exist yet
    pub async fn initialize(&self) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Database tables ready");
        Ok(())
    }

    /// Insert the sample challenges when the table is empty. Returns the number of rows added.
    pub async fn seed_challenges(&self) -> Result<usize, DatabaseError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM challenges")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for seed in SEED_CHALLENGES {
            sqlx::query(
                "INSERT INTO challenges (title, company, domain, difficulty, deadline, status)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(seed.title)
            .bind(seed.company)
            .bind(seed.domain)
            .bind(seed.difficulty)
            .bind(seed.deadline)
            .bind(seed.status)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!("Seeded {} sample challenges", SEED_CHALLENGES.len());
        Ok(SEED_CHALLENGES.len())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }
}
