use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mediagate_backend::{config::Settings, router::create_router, AppState};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Password-gated media upload server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML config file; `MEDIAGATE_*` variables override it
    #[arg(short, long, env = "MEDIAGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Settings::load().context("loading config")?,
    };
    if let Some(bind) = cli.bind {
        settings.bind_addr = bind;
    }

    init_tracing(&settings.log_level, cli.log_json);

    if !settings.static_dir.is_dir() {
        warn!(static_dir = %settings.static_dir.display(), "Static directory not found");
    }

    let addr = settings.bind_addr;
    let state = AppState::new(settings).context("initializing application state")?;

    // Sessions live in memory only and are lost on restart
    let janitor = state.spawn_janitor();

    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Starting web server on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    janitor.shutdown().await;
    info!("Server stopped");

    Ok(())
}
