use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::services::ChallengeService;

pub async fn handle(mut config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    // Seeding is the point of init, whatever DATABASE_SEED_CHALLENGES says
    config.database.seed_challenges = true;

    let db = crate::server::prepare_database(&config).await?;
    let challenges = ChallengeService::new(db.pool().clone()).count().await?;
    db.close().await;

    match output_format {
        OutputFormat::Json => {
            let summary = json!({
                "success": true,
                "database": config.database.url,
                "challenges": challenges,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!(
                "Database ready at {} ({} challenges)",
                config.database.url, challenges
            );
        }
    }

    Ok(())
}
