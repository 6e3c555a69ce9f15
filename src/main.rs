//! deflight server binary.

use anyhow::Context;
use deflight::api::rest::{AppState, create_router};
use deflight::application::{CheapestFareStrategy, FlightAggregationEngine};
use deflight::config::AppConfig;
use deflight::infrastructure::suppliers::build_suppliers;
use deflight::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.log).context("failed to initialise tracing")?;

    tracing::info!(profile = %config.profile, "starting deflight");

    let suppliers = build_suppliers(&config.suppliers, config.profile)
        .context("failed to build suppliers")?;
    let engine = Arc::new(FlightAggregationEngine::new(suppliers));
    let state = Arc::new(AppState::new(engine, Arc::new(CheapestFareStrategy::new())));

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
