// handlers/public/mod.rs - Endpoints that work without a session
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod pages;

pub use dashboard::dashboard_data_get;
pub use health::health_get;
pub use pages::{admin_page, dashboard_page, register_page};
