mod applications;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod repository;
mod routes;
mod state;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::repository::postgres::{PgApplicationRepository, PgJobRepository};
use crate::routes::build_router;
use crate::state::AppState;
use crate::uploads::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Startup continues even if the database is down; see db::create_pool.
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    let uploads = FileStore::open(&config.upload_dir).await?;
    info!("Upload directory ready at {}", uploads.dir().display());

    let state = AppState {
        jobs: Arc::new(PgJobRepository::new(db.clone())),
        applications: Arc::new(PgApplicationRepository::new(db)),
        uploads,
        config: config.clone(),
    };

    info!("Serving frontend from {}", config.frontend_dir.display());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
