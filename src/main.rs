//! Card collector server
//!
//! Serves the collection, trade, quest and pack API over HTTP, backed by
//! PostgreSQL or, with `DATABASE_URL=memory`, by an in-process store.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use card_collector_server::config::{Config, StorageBackend};
use card_collector_server::db;
use card_collector_server::routes::build_router;
use card_collector_server::state::AppState;
use card_collector_server::store::{MemoryDatabase, PgDatabase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting card collector");

    let cors = configure_cors(&config);

    let app: Router = match config.storage_backend() {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            build_router(AppState::new(MemoryDatabase::new(), config.max_pack_size), cors)
        }
        StorageBackend::Postgres => {
            let pool = db::create_pool(&config)
                .await
                .context("Failed to connect to database")?;

            if config.run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }

            build_router(AppState::new(PgDatabase::new(pool), config.max_pack_size), cors)
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn configure_cors(config: &Config) -> CorsLayer {
    let allowed_origins = config.cors_allowed_origins.as_deref().unwrap_or_default();

    if allowed_origins.trim().is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
