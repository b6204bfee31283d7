//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not
//! commands: slash command autocomplete and gateway events.

/// Autocomplete handlers for restaurant names and menu items
pub mod autocomplete;
/// Gateway event handler (ready, messages, channel deletion)
pub mod events;
