//! Gateway event handler.
//!
//! Sets the presence text once connected, greets new ticket channels with
//! the store list and forgets the restaurant selected in deleted channels.

use crate::{
    bot::BotData,
    core::{
        CanteenState,
        ticket::{self, IncomingMessage, WelcomeTrigger},
    },
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{debug, info, warn};

/// Dispatches the gateway events the bot cares about.
///
/// # Errors
/// Returns an error if a Discord request fails.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("{} is connected", data_about_bot.user.name);
            ctx.set_activity(Some(serenity::ActivityData::playing(
                data.config.bot.activity.clone(),
            )));
        }
        serenity::FullEvent::Message { new_message } => {
            if new_message.author.id == framework.bot_id {
                return Ok(());
            }
            on_message(ctx, new_message, data).await?;
        }
        serenity::FullEvent::ChannelDelete { channel, .. } => {
            on_channel_delete(&data.state, channel.id.get()).await;
        }
        _ => {}
    }
    Ok(())
}

/// Forgets the store selected in a deleted channel.
async fn on_channel_delete(state: &CanteenState, channel_id: u64) {
    if let Some(binding) = state.unbind_channel(channel_id).await {
        debug!(
            "Channel {} deleted, dropped selection of {}",
            channel_id, binding.store_name
        );
    }
}

async fn on_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    data: &BotData,
) -> Result<()> {
    let incoming = IncomingMessage {
        author_is_bot: message.author.bot,
        author_name: &message.author.name,
        has_embeds: !message.embeds.is_empty(),
        content: &message.content,
    };
    let Some(trigger) = ticket::welcome_trigger(&incoming, &data.config.ticket) else {
        return Ok(());
    };

    if trigger == WelcomeTrigger::OpenTicketPhrase {
        let channel = message.channel_id.to_channel(ctx).await?;
        let in_ticket = channel.guild().is_some_and(|c| {
            ticket::is_ticket_channel(&c.name, &data.config.ticket.channel_prefix)
        });
        if !in_ticket {
            return Ok(());
        }
    }

    info!("Welcoming ticket channel {} ({:?})", message.channel_id, trigger);

    if !data.state.has_stores().await {
        message
            .channel_id
            .say(&ctx.http, "🔄 Loading the store list…")
            .await?;
    }

    let reply = match data.state.ensure_stores(data.api.as_ref()).await {
        Ok(stores) => ticket::welcome_message(&stores),
        Err(e) => {
            warn!("Cannot welcome channel {}: {}", message.channel_id, e);
            e.user_message()
        }
    };
    message.channel_id.say(&ctx.http, reply).await?;
    Ok(())
}
