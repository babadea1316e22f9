use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::state::AppState;

/// Open the database, prepare schema and seed data, then serve until Ctrl-C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting SkillVerify API in {:?} mode", config.environment);

    let db = prepare_database(&config).await?;
    let state = AppState::new(db.pool().clone(), Arc::new(config.clone()));
    let app = crate::app(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("SkillVerify API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

/// Connect, create tables and seed challenges when enabled
pub async fn prepare_database(config: &AppConfig) -> anyhow::Result<DatabaseManager> {
    let db = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    db.initialize().await.context("failed to create schema")?;

    if config.database.seed_challenges {
        db.seed_challenges()
            .await
            .context("failed to seed challenges")?;
    }

    Ok(db)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
