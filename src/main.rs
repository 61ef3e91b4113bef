//! Heartbeatd - A minimal periodic-heartbeat logging service
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for diagnostics
//! 2. Load configuration from environment variables
//! 3. Start the heartbeat service (writes "started", arms the timer)
//! 4. Wait for shutdown signal (SIGINT/SIGTERM)
//! 5. Stop the service (disarms the timer, writes "stopped")

mod config;
mod error;
mod logger;
mod scheduler;
mod service;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use service::HeartbeatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heartbeatd=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting heartbeat service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: log_path={:?}, interval={}ms",
        config.log_path, config.interval_ms
    );

    let mut service = HeartbeatService::new(&config);
    service.start()?;

    // Block until the host asks us to shut down
    shutdown_signal().await;

    service.stop()?;
    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
