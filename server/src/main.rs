//! Bookmarks server: reads settings from the environment, prepares the
//! database, mounts the routes and serves until Ctrl-C.
//!
//! Run from repo root: `cargo run -p bookmarks-server`

use bookmarks_api::{app, ensure_bookmarks_table, ensure_database_exists, AppState, PgBookmarkStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bookmarks_api=info,bookmarks_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.api_token.is_none() {
        tracing::warn!("API_TOKEN not set; bearer credentials are not checked");
    }

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_bookmarks_table(&pool, &settings.schema).await?;

    let store = PgBookmarkStore::new(pool, settings.schema.clone());
    let state = AppState::new(Arc::new(store));
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
