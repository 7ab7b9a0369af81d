//! Todo API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p todo-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Bind port (default: 8000)
//! - `RUST_LOG` - Log filter (default: info,todo_server=debug,todo_core=debug)
//! - `METRICS_ENABLED` - Serve Prometheus metrics on `/metrics` (default: true)
//! - `SHUTDOWN_TIMEOUT` - Seconds to drain requests on Ctrl+C (default: 30)

use std::sync::Arc;
use std::time::Duration;
use todo_core::TodoStore;
use todo_server::{build_router, metrics, serve, shutdown_signal, AppState, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.observability.log_filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todo server");

    let metrics_handle = if config.observability.metrics_enabled {
        Some(metrics::install_recorder()?)
    } else {
        info!("Metrics disabled");
        None
    };

    let store = Arc::new(TodoStore::new());
    let app = build_router(AppState::new(store, metrics_handle));

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    serve(
        listener,
        app,
        shutdown_signal(),
        Duration::from_secs(config.server.shutdown_timeout),
    )
    .await?;

    info!("Server stopped");
    Ok(())
}
