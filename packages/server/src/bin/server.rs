use anyhow::Context;
use clap::Parser;
use pagekit_server::{serve, AppState, ServerConfig};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Pagekit template server
#[derive(Parser, Debug)]
#[command(name = "pagekit-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ./pagekit.server.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    /// JSON snapshot file for the template store
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Do not seed default templates into an empty store
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::load_file(path)?,
        None => ServerConfig::load(&std::env::current_dir()?)?,
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(snapshot) = args.snapshot {
        config.snapshot_path = Some(snapshot.display().to_string());
    }
    if args.no_seed {
        config.seed_defaults = false;
    }

    let state = AppState::from_config(&config).context("Failed to load template store")?;
    let addr = config.addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve(listener, state).await?;
    Ok(())
}
