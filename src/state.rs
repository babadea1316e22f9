use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionManager;
use crate::config::AppConfig;

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub sessions: SessionManager,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        let sessions = SessionManager::in_memory(&config.security);
        Self {
            db,
            sessions,
            config,
        }
    }
}
