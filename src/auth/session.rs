use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::config::{SecurityConfig, MAX_REMEMBER_ME_DAYS, MAX_SESSION_TTL_HOURS};

/// Server-held state behind a session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub remember_me: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Storage backend for sessions, keyed by opaque token
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session);
    async fn get(&self, token: &str) -> Option<Session>;
    async fn remove(&self, token: &str) -> Option<Session>;
    /// Drop every session belonging to `user_id`, returning how many were removed
    async fn remove_user(&self, user_id: i64) -> usize;
    /// Drop sessions expired at `now`, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

/// Process-local session store
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, token: String, session: Session) {
        self.sessions.write().await.insert(token, session);
    }

    async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.write().await.remove(token)
    }

    async fn remove_user(&self, user_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.user_id != user_id);
        before - sessions.len()
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }
}

/// Issues, resolves and revokes sessions with the configured lifetimes
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    default_ttl: Duration,
    remember_ttl: Duration,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, default_ttl: Duration, remember_ttl: Duration) -> Self {
        Self {
            store,
            default_ttl,
            remember_ttl,
        }
    }

    pub fn in_memory(security: &SecurityConfig) -> Self {
        Self::new(
            Arc::new(MemorySessionStore::new()),
            Duration::hours(clamp_to_i64(security.session_ttl_hours, MAX_SESSION_TTL_HOURS)),
            Duration::days(clamp_to_i64(security.remember_me_days, MAX_REMEMBER_ME_DAYS)),
        )
    }

    /// Lifetime of a session with or without remember-me
    pub fn ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            self.remember_ttl
        } else {
            self.default_ttl
        }
    }

    /// Start a session for the user and return its token
    pub async fn create(&self, user_id: i64, email: &str, remember_me: bool) -> (String, Session) {
        let now = Utc::now();
        let purged = self.store.purge_expired(now).await;
        if purged > 0 {
            debug!("Purged {} expired sessions", purged);
        }

        let token = Self::generate_token();
        let session = Session {
            user_id,
            email: email.to_string(),
            remember_me,
            created_at: now,
            expires_at: now
                .checked_add_signed(self.ttl(remember_me))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.store.insert(token.clone(), session.clone()).await;
        (token, session)
    }

    /// Look up a live session; an expired one is removed and treated as absent
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let session = self.store.get(token).await?;
        if session.is_expired_at(Utc::now()) {
            self.store.remove(token).await;
            debug!("Session for user {} expired", session.user_id);
            return None;
        }
        Some(session)
    }

    pub async fn destroy(&self, token: &str) -> Option<Session> {
        self.store.remove(token).await
    }

    pub async fn revoke_user(&self, user_id: i64) -> usize {
        self.store.remove_user(user_id).await
    }

    fn generate_token() -> String {
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }
}

/// Configured lifetimes land in 1..=max before becoming chrono durations
fn clamp_to_i64(value: u64, max: u64) -> i64 {
    i64::try_from(value.clamp(1, max)).unwrap_or(1)
}
