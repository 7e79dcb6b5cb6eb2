//! Posts gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 GATEWAY                      │
//!     Client Request      │  ┌─────────┐    ┌──────────┐                 │
//!     ────────────────────┼─▶│ server  │───▶│  math    │── 200 / 400     │
//!                         │  │(layers) │    └──────────┘                 │
//!                         │  │         │    ┌──────────┐   ┌─────────┐   │
//!                         │  │         │───▶│  posts   │──▶│ client  │───┼──▶ Upstream
//!                         │  └─────────┘    └────┬─────┘   └────┬────┘   │
//!                         │                      ▼              │        │
//!     Client Response     │                 ┌─────────┐         │        │
//!     ◀───────────────────┼─────────────────│  relay  │◀────────┘        │
//!                         │                 └─────────┘                  │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use posts_gateway::config::{resolve_config, Overrides};
use posts_gateway::lifecycle::{signals, Shutdown};
use posts_gateway::observability::{logging, metrics};
use posts_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "posts-gateway", version, about = "Math and posts HTTP gateway")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Base URL of the upstream posts service.
    #[arg(long, env = "SERVER_URL")]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let overrides = Overrides {
        port: args.port,
        server_url: args.server_url,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let port = listener.local_addr()?.port();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(&shutdown);

    let server = GatewayServer::new(config)?;
    tracing::info!("Application running on port {}", port);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
