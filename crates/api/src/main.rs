use std::net::SocketAddr;
use std::sync::Arc;

use roomgate_core::notify::Notifier;
use roomgate_events::{LineNotifyConfig, LineNotifyDelivery, LogNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomgate_api::config::ServerConfig;
use roomgate_api::router::build_app_router;
use roomgate_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomgate_api=debug,roomgate_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Notifier ---
    let notifier: Arc<dyn Notifier> = match LineNotifyConfig::from_env() {
        Some(line) => {
            tracing::info!(url = %line.url, "LINE Notify alerts enabled");
            Arc::new(LineNotifyDelivery::new(line).expect("Failed to build LINE Notify client"))
        }
        None => {
            tracing::warn!("LINE_NOTIFY_TOKEN not set, alerts will only be logged");
            Arc::new(LogNotifier)
        }
    };

    // --- Store ---
    let state = match config.database_url.clone() {
        Some(database_url) => {
            let pool = roomgate_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            roomgate_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            roomgate_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            AppState::postgres(config.clone(), roomgate_db::PgStore::new(pool), notifier)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            AppState::in_memory(config.clone(), notifier)
        }
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
