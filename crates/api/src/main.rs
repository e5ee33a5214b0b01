use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "catalog_api=debug,catalog_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        cors_origins = ?config.cors_origins,
        "Catalog API configured"
    );

    let pool = connect_database(&config).await;

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let app = build_app_router(
        AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
        },
        &config,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "Catalog API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    // In-flight requests have drained; release connections before exit.
    pool.close().await;
    tracing::info!("Catalog API stopped");
}

/// `RUST_LOG` wins when set; otherwise the catalog crates log at debug.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the pool, make sure Postgres answers, then bring the schema up to
/// date. Any failure here aborts startup: the API is useless without its
/// tables.
async fn connect_database(config: &ServerConfig) -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = catalog_db::create_pool(&url, config.db_max_connections)
        .await
        .expect("Cannot connect to DATABASE_URL");
    catalog_db::health_check(&pool)
        .await
        .expect("Database did not answer SELECT 1");
    catalog_db::run_migrations(&pool)
        .await
        .expect("Catalog migrations failed");

    match catalog_db::migration_status(&pool).await {
        Ok(status) => tracing::info!(
            applied = status.applied,
            embedded = status.embedded,
            max_connections = config.db_max_connections,
            "Database ready"
        ),
        Err(e) => tracing::warn!(error = %e, "Database ready, migration status unreadable"),
    }

    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Ctrl-C handler could not be installed");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler could not be installed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
