//! BetsAPI CLI binary.
//!
//! Entry point for the `betsapi` command.

use anyhow::Context;
use betsapi_cli::{commands, Cli};
use betsapi_sdk::BetsApiClient;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,betsapi_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = if cli.command.needs_client() {
        let config = cli
            .connection
            .to_config()
            .context("invalid BetsAPI configuration")?;
        let client = BetsApiClient::new(config).context("failed to create BetsAPI client")?;
        commands::run(&client, &cli.command).await?
    } else {
        commands::sports_table()
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
