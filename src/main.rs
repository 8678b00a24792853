use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftcal_api::config::ApiConfig;
use shiftcal_db::{create_pool, schema::initialize_database};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting shift calendar API");

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize database schema and seed sample users on first run
    initialize_database(&db_pool).await?;

    // Start API server
    shiftcal_api::start_server(config, db_pool).await?;

    Ok(())
}
