//! Relay proxy (v1)
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ─▶ dispatcher                  │
//!                           │                    │                         │
//!                           │        ┌───────────┴───────────┐             │
//!                           │        ▼                       ▼             │
//!                           │   diagnostics             proxy handler ─────┼──▶ Upstream
//!                           │   /_logs, /_health             │             │
//!                           │        │                       │             │
//!                           │        └──────▶ log store ◀────┘             │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use relay_proxy::config::load_or_default;
use relay_proxy::observability::{logging, metrics};
use relay_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "relay-proxy")]
#[command(about = "Forwarding proxy with an in-memory request log", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init(&config.observability);

    tracing::info!("relay-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.origin,
        max_log_entries = config.logs.max_entries,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
