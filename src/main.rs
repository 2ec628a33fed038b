use clap::Parser;
use quakeview_core::config::Config;
use quakeview_feeds::ScraperUnit;
use quakeview_http::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "quakeview", about = "PHIVOLCS earthquake viewer — JSON API and HTML board")]
struct Cli {
    /// Config file path (default: ./quakeview.toml, optional).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file (e.g. 127.0.0.1:8000).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    tracing::info!(
        scraper_dir = %config.scraper.dir.display(),
        min_magnitude = config.filter.min_magnitude,
        "starting quakeview"
    );

    let state = AppState {
        source: Arc::new(ScraperUnit::new(&config.scraper.dir)),
        min_magnitude: config.filter.min_magnitude,
    };
    quakeview_http::serve(&bind, state).await
}
