#![allow(clippy::result_large_err)]

use canteen_bot::{
    api::{CanteenApi, HttpCanteenApi},
    bot, config,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = Arc::new(config::load_app_configuration()?);
    info!("Ordering API at {}", app_config.api.base_url);

    // 4. Build the ordering API client
    let api: Arc<dyn CanteenApi> = Arc::new(
        HttpCanteenApi::new(&app_config.api)
            .inspect_err(|e| error!("Failed to build API client: {}", e))?,
    );

    // 5. Run the bot
    // DISCORD_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_TOKEN")
        .inspect_err(|e| error!("DISCORD_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, app_config, api).await?;

    Ok(())
}
