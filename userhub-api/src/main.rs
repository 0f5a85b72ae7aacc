//! # UserHub API Server
//!
//! Serves the user management API, health checks, the landing page
//! and the OpenAPI documentation.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p userhub-api
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub_api::{
    app::{build_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let default_filter = format!(
        "userhub_api={level},userhub_shared={level},tower_http={level}",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        app = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        debug = config.app.debug,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    if !std::path::Path::new(&config.static_dir).is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir,
            "Static directory not found; set STATIC_DIR to serve /static"
        );
    }

    let address = config.bind_address();
    let state = AppState::from_config(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
