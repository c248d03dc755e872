mod api;
mod middleware;
mod templates;
mod web;

use std::sync::Arc;

use gemfinder_places::PlacesClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    templates::Templates,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gemfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = gemfinder_db::PoolConfig::from_app_config(&config);
    let pool = gemfinder_db::connect_pool(&config.database_url, pool_config).await?;
    gemfinder_db::run_migrations(&pool).await?;

    let places = PlacesClient::with_base_url(
        &config.google_maps_api_key,
        config.places_request_timeout_secs,
        &config.places_base_url,
    )?;

    let app = build_app(AppState {
        pool,
        places: Arc::new(places),
        templates: Arc::new(Templates::new()?),
        max_pages: config.places_max_pages,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "gemfinder-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
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
