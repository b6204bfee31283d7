//! Order Discord command - places an order from the restaurant selected in
//! the current ticket channel.

use poise::serenity_prelude as serenity;

const CONFIRMED_COLOR: u32 = 0x002E_CC71;

/// Confirmation embed for an accepted order.
#[must_use]
pub fn confirmation_embed(
    confirmation: &crate::core::order::OrderConfirmation,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("✅ Order received!")
        .description(confirmation.description())
        .color(CONFIRMED_COLOR)
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::confirmation_embed;
    use crate::{
        bot::{
            BotData,
            commands::menu::{in_ticket_channel, reject_outside_ticket},
            handlers::autocomplete,
        },
        core::order::{prepare_order, submit_order},
        errors::{Error, Result},
    };
    use tracing::{debug, error};

    /// Orders an item from the restaurant selected with `/menu`.
    ///
    /// Add a note for the store in parentheses, e.g. `Fried Rice (no egg)`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn order(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What to order, e.g. 'Fried Rice (no egg)'"]
        #[autocomplete = "autocomplete::autocomplete_menu_item"]
        #[rest]
        order_string: String,
    ) -> Result<()> {
        if !in_ticket_channel(ctx).await {
            return reject_outside_ticket(ctx).await;
        }
        ctx.defer().await?;

        let data = ctx.data();
        let pending = match prepare_order(
            &data.state,
            ctx.channel_id().get(),
            ctx.author().id.get(),
            &order_string,
        )
        .await
        {
            Ok(pending) => pending,
            Err(e) => {
                debug!("Rejected order {:?}: {}", order_string, e);
                ctx.say(e.user_message()).await?;
                return Ok(());
            }
        };

        ctx.say("...sending your order... 🚀").await?;

        match submit_order(data.api.as_ref(), pending).await {
            Ok(confirmation) => {
                ctx.send(poise::CreateReply::default().embed(confirmation_embed(&confirmation)))
                    .await?;
            }
            Err(e) => {
                error!("Order from {} failed: {}", ctx.author().name, e);
                ctx.say(e.user_message()).await?;
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
