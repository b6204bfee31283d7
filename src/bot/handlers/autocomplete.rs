//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the in-memory state only. Autocomplete never calls
//! the ordering API, so a cold cache simply yields no suggestions.

use crate::{bot::BotData, errors::Error};

/// Discord rejects autocomplete responses with more choices than this.
const MAX_CHOICES: usize = 25;

/// Provides autocomplete suggestions for restaurant names.
///
/// Matches the partial input case-insensitively against the loaded store
/// directory and returns the names sorted alphabetically.
pub async fn autocomplete_store_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.trim().to_lowercase();

    let mut matching: Vec<String> = ctx
        .data()
        .state
        .stores()
        .await
        .into_iter()
        .filter(|store| store.name.to_lowercase().contains(&partial_lower))
        .map(|store| store.name)
        .collect();

    matching.sort();
    matching.truncate(MAX_CHOICES);
    matching
}

/// Provides autocomplete suggestions for `/order`.
///
/// Only items of the restaurant selected in the current channel are offered,
/// and only once that restaurant's menu has been loaded.
pub async fn autocomplete_menu_item(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let state = &ctx.data().state;

    let Some(binding) = state.binding(ctx.channel_id().get()).await else {
        return Vec::new();
    };
    let Some(menu) = state.cached_menu(binding.store_id).await else {
        return Vec::new();
    };

    let mut matching = menu.names_matching(partial);
    matching.truncate(MAX_CHOICES);
    matching
}
