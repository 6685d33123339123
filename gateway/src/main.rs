//! nbgate notebook execution gateway
//!
//! Serves the notebook API behind an authenticating reverse proxy, which is
//! expected to forward the user name in a request header.
//!
//! Usage:
//!   nbgate --port 8899 --database notebooks.duckdb

use std::{net::IpAddr, net::SocketAddr, path::PathBuf};
use anyhow::{Context, Result};
use axum::http::HeaderName;
use clap::Parser;
use nbgate_exec::AdapterRegistry;
use nbgate_server::{build_router, AppState, GatewayConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "nbgate")]
#[command(about = "Notebook execution gateway")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// HTTP port
    #[arg(short, long, default_value = "8899")]
    port: u16,

    /// Path to the document database (in-memory when omitted)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Request header carrying the authenticated user name
    #[arg(long, default_value = "x-remote-user")]
    user_header: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<GatewayConfig> {
        let user_header = HeaderName::from_bytes(self.user_header.as_bytes())
            .with_context(|| format!("Invalid user header name '{}'", self.user_header))?;
        Ok(GatewayConfig {
            listen_addr: SocketAddr::new(self.host, self.port),
            database: self.database,
            user_header,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("nbgate starting...");
    let config = args.into_config()?;

    let documents = config
        .open_documents()
        .context("Failed to open document store")?;
    match &config.database {
        Some(path) => info!("Document store at {}", path.display()),
        None => warn!("No --database given, saved notebooks will not survive a restart"),
    }

    let registry = AdapterRegistry::with_builtin();
    info!(backends = ?registry.backends(), "Execution backends ready");

    let state = AppState::new(registry, documents).with_user_header(config.user_header.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("HTTP API listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("nbgate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
