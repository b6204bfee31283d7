//! Core business logic - framework-agnostic store, menu, order and
//! verification operations. Nothing in here knows about Discord.

/// Channel to store bindings
pub mod binding;
/// Per-store menu cache
pub mod menu;
/// Order text parsing and dispatch
pub mod order;
/// Shared state owned by the bot
pub mod state;
/// Store directory
pub mod store;
/// Ticket channel rules and welcome text
pub mod ticket;
/// Student id verification
pub mod verification;

pub use state::CanteenState;
