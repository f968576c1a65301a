//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;

use crate::application::services::{AuthService, LinkService, SlugAllocator};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::ai::{HttpSlugSuggester, SlugSuggester};
use crate::infrastructure::cache::{run_cache_sweeper, LinkCache, MemoryCache};
use crate::infrastructure::persistence::PgLinkStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - In-memory link cache with a background eviction task
/// - Background click worker
/// - Optional AI slug suggester
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migration, or server bind
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let store: Arc<dyn LinkStore> = Arc::new(PgLinkStore::new(Arc::new(pool)));

    let cache: Arc<dyn LinkCache> = Arc::new(MemoryCache::new(Duration::from_secs(
        config.cache_ttl_seconds,
    )));
    tokio::spawn(run_cache_sweeper(
        cache.clone(),
        Duration::from_secs(config.cache_sweep_interval_seconds),
    ));
    tracing::info!(
        ttl_seconds = config.cache_ttl_seconds,
        "Cache sweeper started"
    );

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, store.clone()));
    tracing::info!("Click worker started");

    let suggester: Option<Arc<dyn SlugSuggester>> = match &config.ai {
        Some(ai) => match HttpSlugSuggester::new(
            ai.api_url.clone(),
            ai.api_token.clone(),
            ai.model.clone(),
            Duration::from_millis(ai.timeout_ms),
        ) {
            Ok(s) => {
                tracing::info!(model = %ai.model, "AI slug suggestions enabled");
                Some(Arc::new(s))
            }
            Err(e) => {
                tracing::warn!("Failed to build AI client: {e}. Suggestions disabled.");
                None
            }
        },
        None => None,
    };

    let allocator = SlugAllocator::new(store.clone(), suggester, config.verify_random_slug);
    let link_service = Arc::new(LinkService::new(
        store,
        cache.clone(),
        allocator,
        config.base_url.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(&config.admin_password));

    let state = AppState {
        link_service,
        auth_service,
        cache,
        click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
