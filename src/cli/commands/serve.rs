use clap::Args;

use crate::config::AppConfig;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Listen address (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Listen port (overrides PORT)")]
    pub port: Option<u16>,
}

pub async fn handle(args: ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    crate::server::run(config).await
}
