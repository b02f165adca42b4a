//! Forecast classification server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::{ForecastPort, ForecastService};
use infrastructure::{AppConfig, WeatherAdapter};
use presentation_http::{DEFAULT_LOG_FILTER, routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first: it decides the log format
    let config_result = AppConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    init_tracing(config.server.json_logs());

    if let Err(e) = &config_result {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Refusing to start: {e}"))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %config.server.bind_address(),
        upstream = %config.weather.base_url,
        "Forecast server starting"
    );

    let adapter = WeatherAdapter::with_config(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
    let forecasts: Arc<dyn ForecastPort> = Arc::new(adapter);

    let state = AppState::new(ForecastService::new(forecasts));
    let app = routes::create_router(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    server::serve(
        listener,
        app,
        shutdown_signal(),
        config.server.shutdown_timeout(),
    )
    .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Install the global subscriber, honouring `RUST_LOG` when set
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
