use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

/// Creates a lazily-connecting PostgreSQL pool.
///
/// An unreachable database does not stop the process: the failure is logged
/// and every request that touches storage fails until it comes back.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;

    match probe_and_migrate(&pool).await {
        Ok(()) => info!("PostgreSQL connected, schema up to date"),
        Err(e) => error!("PostgreSQL connection error: {e:#}"),
    }

    Ok(pool)
}

async fn probe_and_migrate(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("connectivity probe failed")?;

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("running migrations failed")?;

    Ok(())
}
