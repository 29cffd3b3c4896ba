use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trivia_api::config::Settings;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::{server::app::run_server, telemetry::init_tracing};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Settings file, defaults to ./trivia.toml when present
    #[clap(long)]
    config: Option<PathBuf>,
    #[clap(long)]
    host: Option<String>,
    #[clap(long)]
    port: Option<u16>,
    /// SQLite database file
    #[clap(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(host) = cli.host {
        settings.host = host;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }
    if let Some(db_path) = cli.db_path {
        settings.db_path = db_path;
    }

    let pool = establish_connection(&settings.db_path, settings.create_db_if_missing)
        .await
        .with_context(|| format!("Cannot open database {}", settings.db_path.display()))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool, &settings.address()).await
}
