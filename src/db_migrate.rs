use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftcal_api::config::DEFAULT_DATABASE_URL;
use shiftcal_db::{create_pool, schema::initialize_database};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    info!("Connecting to {}", database_url);
    let db_pool = create_pool(&database_url, 1).await?;

    initialize_database(&db_pool).await?;
    db_pool.close().await;

    Ok(())
}
