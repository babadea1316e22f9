pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "skillverify-api")]
#[command(about = "SkillVerify API - accounts, skill profiles, career survey and admin console")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        conflicts_with = "json",
        help = "Output in human-readable text format"
    )]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Create the database schema, seed challenges and exit")]
    Init,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.text {
            OutputFormat::Text
        } else if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config().clone();

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        None => commands::serve::handle(Default::default(), config).await,
        Some(Commands::Init) => commands::init::handle(config, output_format).await,
    }
}
