use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Upper bound for `SESSION_TTL_HOURS` (ten years)
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 365 * 10;
/// Upper bound for `SESSION_REMEMBER_DAYS` (ten years)
pub const MAX_REMEMBER_ME_DAYS: u64 = 365 * 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
    pub seed_challenges: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub session_cookie_name: String,
    pub session_ttl_hours: u64,
    pub remember_me_days: u64,
    pub secure_cookie: bool,
    /// Bearer token guarding /api/admin/*. Admin routes are open when unset.
    #[serde(skip_serializing)]
    pub admin_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("DATABASE_SEED_CHALLENGES") {
            self.database.seed_challenges = v.parse().unwrap_or(self.database.seed_challenges);
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SESSION_COOKIE_NAME") {
            if !v.trim().is_empty() {
                self.security.session_cookie_name = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("SESSION_TTL_HOURS") {
            match parse_bounded(&v, MAX_SESSION_TTL_HOURS) {
                Some(hours) => self.security.session_ttl_hours = hours,
                None => tracing::warn!(
                    "Ignoring SESSION_TTL_HOURS={}, expected 1..={}",
                    v,
                    MAX_SESSION_TTL_HOURS
                ),
            }
        }
        if let Ok(v) = env::var("SESSION_REMEMBER_DAYS") {
            match parse_bounded(&v, MAX_REMEMBER_ME_DAYS) {
                Some(days) => self.security.remember_me_days = days,
                None => tracing::warn!(
                    "Ignoring SESSION_REMEMBER_DAYS={}, expected 1..={}",
                    v,
                    MAX_REMEMBER_ME_DAYS
                ),
            }
        }
        if let Ok(v) = env::var("SESSION_SECURE_COOKIE") {
            self.security.secure_cookie = v.parse().unwrap_or(self.security.secure_cookie);
        }
        if let Ok(v) = env::var("ADMIN_TOKEN") {
            let token = v.trim();
            self.security.admin_token = (!token.is_empty()).then(|| token.to_string());
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: "sqlite://skillverify.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
                seed_challenges: true,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                enable_cors: true,
                session_cookie_name: "svsessid".to_string(),
                session_ttl_hours: 24,
                remember_me_days: 7,
                secure_cookie: false,
                admin_token: None,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: "sqlite://skillverify.db".to_string(),
                max_connections: 10,
                connection_timeout: 5,
                seed_challenges: true,
            },
            api: ApiConfig {
                enable_request_logging: false,
                max_request_size_bytes: 256 * 1024,
            },
            security: SecurityConfig {
                enable_cors: false,
                session_cookie_name: "svsessid".to_string(),
                session_ttl_hours: 12,
                remember_me_days: 7,
                secure_cookie: true,
                admin_token: None,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Positive integer no larger than `max`
fn parse_bounded(raw: &str, max: u64) -> Option<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|value| (1..=max).contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lifetimes_outside_bounds_are_rejected() {
        assert_eq!(parse_bounded("24", MAX_SESSION_TTL_HOURS), Some(24));
        assert_eq!(parse_bounded(" 30 ", MAX_REMEMBER_ME_DAYS), Some(30));
        assert_eq!(parse_bounded("0", MAX_REMEMBER_ME_DAYS), None);
        assert_eq!(parse_bounded("-1", MAX_REMEMBER_ME_DAYS), None);
        assert_eq!(parse_bounded("100000000", MAX_REMEMBER_ME_DAYS), None);
        assert_eq!(parse_bounded("18446744073709551615", MAX_SESSION_TTL_HOURS), None);
        assert_eq!(parse_bounded("week", MAX_REMEMBER_ME_DAYS), None);
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 5000);
        assert!(!config.security.secure_cookie);
        assert_eq!(config.security.remember_me_days, 7);
        assert!(config.security.admin_token.is_none());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.security.secure_cookie);
        assert!(!config.api.enable_request_logging);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = AppConfig::development();
        config.server.port = 8081;
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn admin_token_is_not_serialized() {
        let mut config = AppConfig::development();
        config.security.admin_token = Some("hunter2".to_string());
        let rendered = serde_json::to_string(&config).unwrap();
        assert!(!rendered.contains("hunter2"));
    }
}
