mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod reporter;
mod routes;
mod state;
mod stats;
mod store;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-mem-kv starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState::new();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reporter = reporter::spawn(
        Arc::clone(&state.stats),
        state.store.clone(),
        Duration::from_secs(config.report_interval_secs),
        shutdown_rx,
    );

    let app = app::build_app(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // The server has drained; stop the reporter before exiting. The send
    // only fails if the reporter has already exited.
    let _ = shutdown_tx.send(true);
    reporter.await.context("Reporter task failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
