//! Fund Chat - API Server Binary
//!
//! Seeds the in-memory portfolio store and serves the chat API and page.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin fund-chat-api
//!
//! # Run with environment variables
//! API_PORT=8080 API_RNG_SEED=42 cargo run --bin fund-chat-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 3001)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_DEFAULT_USER` - User answered when a request names none (default: user1)
//! * `API_TIMEZONE` - Timezone deciding "today" (default: Asia/Shanghai)
//! * `API_SEED_DAYS` - Days of generated NAV history (default: 90)
//! * `API_RNG_SEED` - Fixed seed for reproducible sample prices
//! * `API_AS_OF` - Pins "today" to a date such as 2024-06-28
//! * `API_ALERT_THRESHOLD` - Report alert threshold in percent (default: 3)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::sample_store;
use interface_api::{config::ApiConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone,
        "Starting Fund Chat API Server"
    );

    let seed = config.seed_config();
    let store = sample_store(&seed).context("failed to seed the portfolio store")?;
    let stats = store.stats();
    tracing::info!(
        as_of = %seed.as_of,
        funds = stats.funds,
        holdings = stats.holdings,
        prices = stats.prices,
        "Portfolio store seeded"
    );

    let app = create_router(AppState::new(Arc::new(store), config.clone()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from the environment, falling back to defaults.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid API configuration ({}), using defaults", e);
        ApiConfig::default()
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
