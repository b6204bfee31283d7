//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Owner-only maintenance commands
pub mod admin;

/// General utility commands
pub mod general;

/// Store menu command
pub mod menu;

/// Order placement command
pub mod order;

/// Student verification command
pub mod verify;

// Export commands
pub use admin::*;
pub use general::*;
pub use menu::*;
pub use order::*;
pub use verify::*;

use crate::{bot::BotData, errors::Error};

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        menu(),
        order(),
        verify(),
        reload(),
        help(),
        ping(),
        secret(),
    ]
}

/// Usage line shown when a command is invoked with missing arguments.
#[must_use]
pub fn usage_hint(command_name: &str) -> Option<&'static str> {
    match command_name {
        "menu" => Some("/menu <restaurant name>"),
        "order" => Some("/order <item> (optional note)"),
        "verify" => Some("!login <student id>"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_commands_are_registered_once() {
        let commands = all_commands();
        let mut names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["help", "menu", "order", "ping", "reload", "secret", "verify"]
        );
    }

    #[test]
    fn test_login_is_an_alias_of_verify() {
        let commands = all_commands();
        let verify = commands.iter().find(|c| c.name == "verify");
        assert!(verify.is_some_and(|c| c.aliases.iter().any(|a| a == "login")));
    }

    #[test]
    fn test_usage_hints() {
        assert_eq!(usage_hint("menu"), Some("/menu <restaurant name>"));
        assert_eq!(usage_hint("ping"), None);
    }
}
