use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use lotto_match_api::{
    api::{create_router, AppState},
    config::Config,
    services::catalog::{CatalogNormalizer, CatalogService, HttpCatalogSource, NormalizationTables},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    let tables = match &config.catalog_tables_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog normalization tables");
            NormalizationTables::load(path)?
        }
        None => NormalizationTables::default(),
    };

    let source = HttpCatalogSource::new(&config.catalog_api_url, config.catalog_request_timeout())
        .context("Failed to build catalog HTTP client")?;
    let catalog = CatalogService::new(
        Arc::new(source),
        CatalogNormalizer::new(tables),
        config.catalog_fetch_deadline(),
    );

    let shutdown = CancellationToken::new();
    let state = AppState::new(catalog, shutdown.clone());
    let app = create_router(state, &config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(
        address = %address,
        catalog_api_url = %config.catalog_api_url,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM and cancels in-flight upstream work
async fn shutdown_signal(shutdown: CancellationToken) {
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
    shutdown.cancel();
}
