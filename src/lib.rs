pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application router over the given state
pub fn app(state: AppState) -> Router {
    let api_config = state.config.api.clone();
    let enable_cors = state.config.security.enable_cors;

    let mut router = Router::new()
        // Pages
        .route("/", get(handlers::public::dashboard_page))
        .route("/register-page", get(handlers::public::register_page))
        .route("/admin", get(handlers::public::admin_page))
        .route("/health", get(handlers::public::health_get))
        // API
        .merge(auth_routes())
        .merge(user_routes())
        .merge(admin_routes(state.clone()))
        .fallback(handlers::not_found)
        // Global middleware
        .layer(from_fn_with_state(
            state.clone(),
            middleware::session_context_middleware,
        ))
        .layer(DefaultBodyLimit::max(api_config.max_request_size_bytes));

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if api_config.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/api/register", post(auth::register_post))
        .route("/api/login", post(auth::login_post))
        .route("/api/logout", post(auth::logout_post))
}

fn user_routes() -> Router<AppState> {
    use handlers::{protected, public};

    Router::new()
        .route("/api/dashboard-data", get(public::dashboard_data_get))
        .route("/api/submit-survey", post(protected::submit_survey_post))
        .route("/api/update-profile", put(protected::update_profile_put))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/api/admin/users", get(admin::users_get))
        .route("/api/admin/users/:id", delete(admin::user_delete))
        .route("/api/admin/surveys", get(admin::surveys_get))
        .route("/api/admin/challenges", get(admin::challenges_get))
        .route("/api/admin/stats", get(admin::stats_get))
        .route_layer(from_fn_with_state(
            state,
            middleware::admin_token_middleware,
        ))
}
