//! Menu Discord command - selects a restaurant for the current ticket channel
//! and shows what it sells.

use crate::{
    core::{menu::Menu, ticket},
    models::Store,
};
use poise::serenity_prelude as serenity;

const MENU_COLOR: u32 = 0x0034_98DB;

/// Builds the menu embed for `store`.
///
/// Stores with a menu picture get the picture; the others get a text list,
/// which needs a non-empty menu. Returns `None` when there is nothing to show.
#[must_use]
pub fn build_menu_embed(store: &Store, menu: Option<&Menu>) -> Option<serenity::CreateEmbed> {
    let title = format!("📋 {} menu", store.name);
    let mut embed = if let Some(url) = &store.menu_url {
        serenity::CreateEmbed::new()
            .title(title)
            .color(MENU_COLOR)
            .image(url)
    } else {
        let menu = menu.filter(|m| !m.is_empty())?;
        serenity::CreateEmbed::new()
            .title(title)
            .color(MENU_COLOR)
            .description(menu.render_lines())
    };

    match menu.and_then(|m| m.items().first()) {
        Some(example) => {
            embed = embed.field("💡 How to order", ticket::ordering_hint(&example.name), false);
        }
        None => {
            embed = embed.footer(serenity::CreateEmbedFooter::new(
                "This store has no items in the system yet",
            ));
        }
    }
    Some(embed)
}

/// True when the command was invoked in a ticket channel.
pub(crate) async fn in_ticket_channel(
    ctx: poise::Context<'_, crate::bot::BotData, crate::errors::Error>,
) -> bool {
    let prefix = &ctx.data().config.ticket.channel_prefix;
    ctx.guild_channel()
        .await
        .is_some_and(|channel| ticket::is_ticket_channel(&channel.name, prefix))
}

/// Ephemeral notice for commands used outside ticket channels.
pub(crate) async fn reject_outside_ticket(
    ctx: poise::Context<'_, crate::bot::BotData, crate::errors::Error>,
) -> crate::errors::Result<()> {
    ctx.send(
        poise::CreateReply::default()
            .content("This command can only be used inside a ticket channel.")
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{build_menu_embed, in_ticket_channel, reject_outside_ticket};
    use crate::{
        bot::{BotData, handlers::autocomplete},
        errors::{Error, Result},
    };
    use tracing::info;

    /// Shows a restaurant's menu and selects it for this ticket.
    ///
    /// The menu is fetched from the ordering API on first use and cached.
    #[poise::command(slash_command, prefix_command)]
    pub async fn menu(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Restaurant whose menu you want to see"]
        #[autocomplete = "autocomplete::autocomplete_store_name"]
        #[rest]
        store_name: String,
    ) -> Result<()> {
        if !in_ticket_channel(ctx).await {
            return reject_outside_ticket(ctx).await;
        }
        ctx.defer().await?;

        let data = ctx.data();
        let store = match data.state.find_store(data.api.as_ref(), &store_name).await {
            Ok(store) => store,
            Err(e) => {
                ctx.say(e.user_message()).await?;
                return Ok(());
            }
        };

        data.state.bind_channel(ctx.channel_id().get(), &store).await;

        // Always load the products, even for picture menus: /order needs them.
        let menu = data
            .state
            .menu_for(data.api.as_ref(), store.store_id)
            .await
            .ok();

        info!(
            "Showing menu of {} in channel {} (picture: {})",
            store.name,
            ctx.channel_id(),
            store.menu_url.is_some()
        );

        let Some(embed) = build_menu_embed(&store, menu.as_deref()) else {
            ctx.say(format!(
                "❌ Sorry, the menu of **{}** cannot be loaded right now.",
                store.name
            ))
            .await?;
            return Ok(());
        };

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_products, sample_stores};

    #[test]
    fn test_text_menu_requires_items() {
        let stores = sample_stores();
        let mama = &stores[0];
        assert!(build_menu_embed(mama, None).is_none());
        assert!(build_menu_embed(mama, Some(&Menu::default())).is_none());

        let menu = Menu::from_products(sample_products(1));
        assert!(build_menu_embed(mama, Some(&menu)).is_some());
    }

    #[test]
    fn test_picture_menu_without_products() {
        assert!(build_menu_embed(&sample_stores()[1], None).is_some());
    }
}
