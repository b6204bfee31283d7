//! Owner-only maintenance commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Reloads the store list and forgets every cached menu.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn reload(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        match data.state.reload(data.api.as_ref()).await {
            Ok(count) => {
                info!("{} reloaded the store directory", ctx.author().name);
                ctx.say(format!(
                    "🔄 Reloaded {count} stores. Menus will be fetched again on next use."
                ))
                .await?;
            }
            Err(e) => {
                ctx.say(e.user_message()).await?;
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
