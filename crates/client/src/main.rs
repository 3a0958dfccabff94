//! `society` - command-line client for society admins

use anyhow::Context as _;
use clap::Parser;
use client::commands::{self, Commands, Context};
use client::shared::config::load_config;
use client::shared::paths::ConfigPaths;
use client::system::tracing as logging;

#[derive(Parser)]
#[command(name = "society")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API base URL, e.g. http://localhost:8080/api
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Society to work with
    #[arg(long, global = true)]
    society_id: Option<i64>,

    /// Debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = ConfigPaths::new()?;
    paths.ensure_dir_exists()?;
    logging::initialize(&paths.log_dir, cli.verbose)?;

    let mut config = load_config(&paths).context("Failed to load config.toml")?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(id) = cli.society_id {
        config.society.id = id;
    }
    tracing::debug!(
        "API {} / society {}",
        config.api.base_url,
        config.society.id
    );

    let ctx = Context::new(config, paths)?;
    commands::dispatch(&ctx, cli.command).await?;
    Ok(())
}
