use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pay_package_engine::api::{AppState, create_router};
use pay_package_engine::config::ConfigLoader;

/// Serve the pay package calculator API.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding engine.yaml and clients.yaml
    #[arg(long, env = "PAY_PACKAGE_CONFIG", default_value = "./config/travel_nurse")]
    config_dir: PathBuf,

    /// Address to listen on
    #[arg(long, env = "PAY_PACKAGE_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config_dir)
        .with_context(|| format!("loading rate card from {}", args.config_dir.display()))?;
    info!(
        rate_card = %config.metadata().name,
        version = %config.metadata().version,
        clients = config.fees().len(),
        "Rate card loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!(addr = %args.bind, "Starting server");
    axum::serve(listener, app).await?;

    Ok(())
}
