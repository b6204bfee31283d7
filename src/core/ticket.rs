//! Ticket channels - per-customer channels opened by a separate helper bot.
//! Ordering only happens inside them.

use crate::config::app::TicketConfig;
use crate::core::store::format_store_list;
use crate::models::Store;

/// True for channels whose name starts with the ticket prefix.
#[must_use]
pub fn is_ticket_channel(channel_name: &str, prefix: &str) -> bool {
    channel_name.starts_with(prefix)
}

/// The parts of a chat message the welcome logic looks at.
#[derive(Debug, Clone, Copy)]
pub struct IncomingMessage<'a> {
    /// Sent by a bot account
    pub author_is_bot: bool,
    /// Author display name
    pub author_name: &'a str,
    /// Carries at least one embed
    pub has_embeds: bool,
    /// Message text
    pub content: &'a str,
}

/// Why a message deserves the store list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeTrigger {
    /// The helper bot posted its ticket embed.
    HelperBot,
    /// A customer typed "open ticket". Only honoured inside ticket channels.
    OpenTicketPhrase,
}

/// Decides whether `message` should be answered with the store list.
///
/// The ticket-channel check for [`WelcomeTrigger::OpenTicketPhrase`] is left
/// to the caller, which knows the channel name.
#[must_use]
pub fn welcome_trigger(message: &IncomingMessage<'_>, config: &TicketConfig) -> Option<WelcomeTrigger> {
    if message.author_is_bot {
        return (message.author_name == config.helper_bot_name && message.has_embeds)
            .then_some(WelcomeTrigger::HelperBot);
    }
    message
        .content
        .to_lowercase()
        .contains("open ticket")
        .then_some(WelcomeTrigger::OpenTicketPhrase)
}

/// Store list plus instructions, posted when a ticket opens.
#[must_use]
pub fn welcome_message(stores: &[Store]) -> String {
    let example = stores.first().map_or("Mama", |s| s.name.as_str());
    format!(
        "Welcome! Please choose a restaurant:\n{}\n**How to choose:** type `/menu <restaurant name>` (e.g. `/menu {example}`)",
        format_store_list(stores)
    )
}

/// "How to order" text shown under a menu.
#[must_use]
pub fn ordering_hint(example_item: &str) -> String {
    format!(
        "Type `/order {example_item}`\nor `/order {example_item} (a note for the store)`"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_stores;

    fn message<'a>(author_is_bot: bool, author_name: &'a str, has_embeds: bool, content: &'a str) -> IncomingMessage<'a> {
        IncomingMessage {
            author_is_bot,
            author_name,
            has_embeds,
            content,
        }
    }

    #[test]
    fn test_ticket_channel_prefix() {
        assert!(is_ticket_channel("ticket-0042", "ticket-"));
        assert!(!is_ticket_channel("general", "ticket-"));
        assert!(!is_ticket_channel("my-ticket-1", "ticket-"));
    }

    #[test]
    fn test_helper_bot_embed_triggers_welcome() {
        let config = TicketConfig::default();
        assert_eq!(
            welcome_trigger(&message(true, "Ticket Tool", true, ""), &config),
            Some(WelcomeTrigger::HelperBot)
        );
        assert_eq!(
            welcome_trigger(&message(true, "Ticket Tool", false, "hi"), &config),
            None
        );
        assert_eq!(
            welcome_trigger(&message(true, "Other Bot", true, "open ticket"), &config),
            None
        );
    }

    #[test]
    fn test_open_ticket_phrase_from_humans() {
        let config = TicketConfig::default();
        assert_eq!(
            welcome_trigger(&message(false, "somchai", false, "Please OPEN TICKET now"), &config),
            Some(WelcomeTrigger::OpenTicketPhrase)
        );
        assert_eq!(
            welcome_trigger(&message(false, "somchai", false, "hello"), &config),
            None
        );
    }

    #[test]
    fn test_welcome_message_lists_stores() {
        let text = welcome_message(&sample_stores());
        assert!(text.contains("• **Mama**\n• **KFC**\n"));
        assert!(text.contains("`/menu Mama`"));
    }
}
