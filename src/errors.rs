//! Unified error type for the canteen bot.
//!
//! Every failure in the bot ends up as a chat message for the person who
//! triggered it. Domain errors carry enough context to build that message via
//! [`Error::user_message`]; infrastructure errors are relayed with their raw text.

use thiserror::Error;

/// Every failure the bot can report.
#[derive(Debug, Error)]
pub enum Error {
    /// `config.toml` could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required environment variable is missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The ordering API could not be reached or answered garbage
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The ordering API answered with a non-success status
    #[error("Ordering API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The store directory is empty even after a refresh
    #[error("No stores are available")]
    NoStoresAvailable,

    /// `/menu` named a store that does not exist
    #[error("Store not found: {name}")]
    StoreNotFound { name: String },

    /// `/order` in a channel without a selected store
    #[error("No store selected for this channel")]
    NoStoreSelected,

    /// The selected store's menu is not cached
    #[error("Menu for store '{store}' is not loaded")]
    MenuNotLoaded { store: String },

    /// The ordered item is not on the selected store's menu
    #[error("Menu item '{name}' not found in store '{store}'")]
    ProductNotFound { name: String, store: String },

    /// Malformed student id
    #[error("Invalid student ID: {reason}")]
    InvalidStudentId { reason: String },

    /// Well-formed student id missing from the registry
    #[error("Student ID {id} is not registered")]
    UnknownStudent { id: String },

    /// Discord request or gateway failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

impl Error {
    /// Renders the error as the chat message shown to the requester.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoStoresAvailable => {
                "❌ Sorry, the store list could not be loaded from the ordering API.".to_string()
            }
            Self::StoreNotFound { name } => format!("❌ No store named `{name}`."),
            Self::NoStoreSelected => {
                "Please choose a store first: type `/menu <store name>`.".to_string()
            }
            Self::MenuNotLoaded { .. } => {
                "Something went wrong, please run `/menu` again.".to_string()
            }
            Self::ProductNotFound { name, store } => {
                format!("❌ **{name}** is not on the menu of {store}.")
            }
            Self::Api { status, body } => {
                format!("❌ The order could not be placed (Status: {status})\n`{body}`")
            }
            Self::Http(e) => format!("❌ Could not reach the ordering API: {e}"),
            Self::InvalidStudentId { reason } => format!("❌ Invalid student ID: {reason}"),
            Self::UnknownStudent { id } => {
                format!("❌ Student ID `{id}` was not found in the registry.")
            }
            other => format!("❌ An error occurred: {other}"),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_missing_product_names_store() {
        let err = Error::ProductNotFound {
            name: "Pad Thai".to_string(),
            store: "Mama".to_string(),
        };
        assert_eq!(err.user_message(), "❌ **Pad Thai** is not on the menu of Mama.");
    }

    #[test]
    fn test_user_message_relays_raw_api_body() {
        let err = Error::Api {
            status: 404,
            body: "Product not found in store".to_string(),
        };
        let message = err.user_message();
        assert!(message.contains("Status: 404"));
        assert!(message.contains("`Product not found in store`"));
    }

    #[test]
    fn test_user_message_hints_menu_command_when_unbound() {
        assert!(Error::NoStoreSelected.user_message().contains("/menu"));
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = Error::Config {
            message: "bad toml".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "❌ An error occurred: Configuration error: bad toml"
        );
    }
}
