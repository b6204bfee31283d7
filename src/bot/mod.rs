//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the canteen state and the ordering API client into a
//! poise framework: prefix and slash commands, autocomplete, and the gateway
//! events that drive ticket channels.

/// Discord command implementations (menu, order, verify, admin, general)
pub mod commands;
/// Discord event and autocomplete handlers
pub mod handlers;

use crate::api::CanteenApi;
use crate::config::AppConfig;
use crate::core::CanteenState;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands.
///
/// Holds the configuration, the ordering API client and the one
/// [`CanteenState`] every handler reads and updates.
pub struct BotData {
    /// Settings loaded at startup
    pub config: Arc<AppConfig>,
    /// Client for the canteen ordering API
    pub api: Arc<dyn CanteenApi>,
    /// Store directory, menu cache and channel bindings
    pub state: CanteenState,
}

impl BotData {
    /// Creates bot data with an empty state.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, api: Arc<dyn CanteenApi>) -> Self {
        Self {
            config,
            api,
            state: CanteenState::new(),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::ArgumentParse { ctx, .. } => {
            let hint = commands::usage_hint(&ctx.command().name).map_or_else(
                || "❌ Missing or invalid argument.".to_string(),
                |usage| format!("❌ Missing or invalid argument. Usage: `{usage}`"),
            );
            if let Err(e) = ctx.say(hint).await {
                error!("Failed to send usage hint: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and runs until the gateway connection ends.
///
/// The store directory is loaded once during setup; a failure there is logged
/// and the bot starts with an empty directory.
///
/// # Errors
/// Returns an error if the client cannot be built or the connection fails.
#[instrument(skip_all)]
pub async fn run_bot(
    token: String,
    config: Arc<AppConfig>,
    api: Arc<dyn CanteenApi>,
) -> Result<()> {
    let prefix = config.bot.prefix.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::events::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = config.bot.dev_guild_id {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }

                let data = BotData::new(config, api);
                if let Err(e) = data.state.refresh_stores(data.api.as_ref()).await {
                    warn!("Starting without a store directory: {}", e);
                }
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;
