use clinic_api::config::ApiConfig;
use clinic_db::create_pool;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    clinic_api::init_tracing(config.log_level)?;
    info!(addr = %config.server_addr(), "configuration loaded");

    // Create database connection pool
    let db_pool = create_pool(
        config.database.connect_options()?,
        config.database.max_connections,
    )
    .await?;

    // Start API server
    clinic_api::start_server(config, db_pool).await?;

    Ok(())
}
