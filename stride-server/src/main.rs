//! Binary entry point: configuration, logging, the MongoDB store handle,
//! and the axum server with graceful shutdown.
//!
//! The store handle is created once here and passed to every handler
//! through application state. The database connection is lazy, so the
//! process comes up even when the store is unreachable; `GET /test`
//! reports the store's actual condition.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stride_core::{backend::StoreBackendBuilder, store::DocumentStore};
use stride_mongodb::MongoDbStore;
use stride_server::{app, config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stride_server=info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Failed to load configuration");

    let backend = MongoDbStore::builder(&config.database_url, &config.database_name)
        .build()
        .await
        .expect("Failed to initialize document store");
    let state = AppState::new(DocumentStore::new(backend));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
