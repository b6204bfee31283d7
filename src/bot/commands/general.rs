//! General Discord commands - ping, help and secret.
//! These commands touch neither the ordering API nor the shared state.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Canteen Bot Help**\n\
        Order food from the canteen without leaving Discord.\n\n\
        **Ordering** (inside your ticket channel)\n\
        • `/menu <restaurant>` - Shows a restaurant's menu and selects it for this ticket.\n\
        • `/order <item> (note)` - Orders an item from the selected restaurant, e.g. `/order Fried Rice (no egg)`.\n\n\
        **Account**\n\
        • `/verify <student id>` or `!login <student id>` - Verifies you as a student.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Replies with a message only you can see.
    #[poise::command(slash_command)]
    pub async fn secret(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .content("🤫 Only you can see this message.")
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
