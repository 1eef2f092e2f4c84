//! # filialend — filialen daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`filialen.toml`, env vars)
//! - Initialize `tracing` with the configured filter
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository, the service and the link builder
//! - Build the axum router and serve it until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use filialen_adapter_http_axum::links::LinkBuilder;
use filialen_adapter_http_axum::state::AppState;
use filialen_adapter_storage_sqlite_sqlx::SqliteFiliaalRepository;
use filialen_app::services::filiaal_service::FiliaalService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = filialen_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    tracing::info!(url = config.database_url(), "database ready");

    // Services
    let filiaal_repo = SqliteFiliaalRepository::new(db.pool().clone());
    let filiaal_service = FiliaalService::new(filiaal_repo);

    // HTTP
    let state = AppState::new(
        filiaal_service,
        LinkBuilder::new(config.server.public_url.as_str()),
    );
    let app = filialen_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "filialend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("filialend stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received, draining connections");
}
