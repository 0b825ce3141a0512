pub mod models;
pub mod repositories;
pub mod repository;

pub use repository::{ClinicRepository, PgClinicRepository};

#[cfg(feature = "mock")]
pub use repository::MockClinicRepository;

use eyre::{Result, WrapErr};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use tracing::info;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(options: PgConnectOptions, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .wrap_err("Failed to connect to the database")?;

    info!(max_connections, "database pool ready");
    Ok(pool)
}
