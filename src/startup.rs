//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including the optional alert sink, shared counters and route setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::error::DemoError;
use crate::notify::create_notifier;
use crate::routes;
use crate::state::AppState;

/// Initializes and runs the application server.
///
/// Builds the shared state and router, binds to the configured address and
/// serves until SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<AppConfig>) -> Result<(), DemoError> {
    let notifier = create_notifier(&config).await;
    let state = AppState::new(config.clone(), notifier);
    let app = routes::create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    info!(
        event_name = "server.listening",
        event_domain = "server",
        address = %local_addr,
        reset_enabled = config.features.reset_enabled,
        "App on :{}",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
