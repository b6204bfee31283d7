//! Order dispatcher - turns free text in a ticket channel into a purchase
//! request against the ordering API.
//!
//! Placing an order is split in two so the chat layer can show a "sending"
//! notice in between: [`prepare_order`] validates everything locally and never
//! touches the network, [`submit_order`] issues the single `POST /orders/add`.

use crate::api::CanteenApi;
use crate::core::state::CanteenState;
use crate::errors::{Error, Result};
use crate::models::OrderRequest;
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Splits `name (note)` into its parts.
///
/// Everything from the first `(` up to a closing `)` at the very end is the
/// note; earlier parentheses inside the name are not treated specially.
/// An empty note counts as no note.
#[must_use]
pub fn parse_order_string(text: &str) -> (String, Option<String>) {
    let text = text.trim();
    if let Some(body) = text.strip_suffix(')') {
        if let Some(open) = body.find('(') {
            let name = body[..open].trim().to_string();
            let note = body[open + 1..].trim();
            let note = (!note.is_empty()).then(|| note.to_string());
            return (name, note);
        }
    }
    (text.to_string(), None)
}

/// A validated order that has not been sent yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    /// Body for `POST /orders/add`
    pub request: OrderRequest,
    /// Store the item comes from
    pub store_name: String,
    /// Name as listed on the menu
    pub product_name: String,
    /// Listed price in baht
    pub price: f64,
    /// Note for the store, if any
    pub note: Option<String>,
}

/// What the API answered for a submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Store the item comes from
    pub store_name: String,
    /// Name as listed on the menu
    pub product_name: String,
    /// Note for the store, if any
    pub note: Option<String>,
    /// Order number assigned by the API
    pub order_id: Option<i64>,
    /// Pickup queue position, shown verbatim
    pub queue_number: Option<i64>,
}

fn or_na(value: Option<i64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

impl OrderConfirmation {
    /// Embed body shown to the customer.
    #[must_use]
    pub fn description(&self) -> String {
        let mut desc = format!(
            "**Store:** {}\n**Item:** {}\n",
            self.store_name, self.product_name
        );
        if let Some(note) = &self.note {
            let _ = writeln!(desc, "**Note:** {note}");
        }
        let _ = write!(
            desc,
            "\n**Order number:** `{}`\n**🔔 Your queue number: {}**",
            or_na(self.order_id),
            or_na(self.queue_number)
        );
        desc
    }
}

/// Validates an order typed in `channel_id` without contacting the API.
///
/// # Errors
/// * [`Error::NoStoreSelected`] when the channel has no bound store
/// * [`Error::MenuNotLoaded`] when the bound store's menu is not cached
/// * [`Error::ProductNotFound`] when the item is not on that menu
pub async fn prepare_order(
    state: &CanteenState,
    channel_id: u64,
    orderer_id: u64,
    text: &str,
) -> Result<PendingOrder> {
    let binding = state
        .binding(channel_id)
        .await
        .ok_or(Error::NoStoreSelected)?;

    let (name, note) = parse_order_string(text);

    let menu = state
        .cached_menu(binding.store_id)
        .await
        .ok_or_else(|| Error::MenuNotLoaded {
            store: binding.store_name.clone(),
        })?;

    let product = menu.find(&name).ok_or_else(|| Error::ProductNotFound {
        name: name.clone(),
        store: binding.store_name.clone(),
    })?;

    Ok(PendingOrder {
        request: OrderRequest {
            student_id: orderer_id,
            store_id: binding.store_id,
            product_id: product.product_id,
        },
        store_name: binding.store_name,
        product_name: product.name.clone(),
        price: product.price,
        note,
    })
}

/// Sends a prepared order. No retries: a repeated command places a second order.
///
/// # Errors
/// Forwards [`Error::Api`] / [`Error::Http`] from the client.
#[instrument(skip(api), fields(store = %pending.store_name, product = %pending.product_name))]
pub async fn submit_order(
    api: &dyn CanteenApi,
    pending: PendingOrder,
) -> Result<OrderConfirmation> {
    let receipt = api.submit_order(&pending.request).await?;
    info!(
        "Order placed by {}: id {:?}, queue {:?}",
        pending.request.student_id, receipt.id, receipt.queue_number
    );
    Ok(OrderConfirmation {
        store_name: pending.store_name,
        product_name: pending.product_name,
        note: pending.note,
        order_id: receipt.id,
        queue_number: receipt.queue_number,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::MockCanteenApi;
    use crate::models::OrderReceipt;
    use crate::test_utils::{init_test_tracing, sample_stores, state_with_menu};

    #[test]
    fn test_parse_order_with_note() {
        assert_eq!(
            parse_order_string("Fried Rice (no egg)"),
            ("Fried Rice".to_string(), Some("no egg".to_string()))
        );
    }

    #[test]
    fn test_parse_order_without_note() {
        assert_eq!(
            parse_order_string("Fried Rice"),
            ("Fried Rice".to_string(), None)
        );
    }

    #[test]
    fn test_parse_order_edge_cases() {
        assert_eq!(
            parse_order_string("  Pad Kra Pao(extra spicy)  "),
            ("Pad Kra Pao".to_string(), Some("extra spicy".to_string()))
        );
        assert_eq!(parse_order_string("Tea ()"), ("Tea".to_string(), None));
        // Parentheses that do not close the text are part of the name.
        assert_eq!(
            parse_order_string("Tea (large) please"),
            ("Tea (large) please".to_string(), None)
        );
        // First opening parenthesis wins.
        assert_eq!(
            parse_order_string("Set (A) (no ice)"),
            ("Set".to_string(), Some("A) (no ice".to_string()))
        );
    }

    #[tokio::test]
    async fn test_unbound_channel_reports_no_store_selected() {
        let state = CanteenState::new();
        let result = prepare_order(&state, 1, 42, "Fried Rice").await;
        assert!(matches!(result, Err(Error::NoStoreSelected)));
    }

    #[tokio::test]
    async fn test_bound_channel_without_cached_menu() {
        let state = CanteenState::new();
        state.bind_channel(5, &sample_stores()[1]).await;
        let result = prepare_order(&state, 5, 42, "Fried Rice").await;
        assert!(matches!(result, Err(Error::MenuNotLoaded { store }) if store == "KFC"));
    }

    #[tokio::test]
    async fn test_unknown_product_issues_no_request() {
        // prepare_order has no API handle, so a rejected order cannot reach the network.
        let state = state_with_menu(7).await;

        let result = prepare_order(&state, 7, 42, "Sushi (no wasabi)").await;
        assert!(matches!(
            result,
            Err(Error::ProductNotFound { name, store }) if name == "Sushi" && store == "Mama"
        ));
    }

    #[tokio::test]
    async fn test_prepare_order_matches_any_case() -> Result<()> {
        let state = state_with_menu(7).await;
        let pending = prepare_order(&state, 7, 42, "fried RICE (no egg)").await?;

        assert_eq!(
            pending.request,
            OrderRequest {
                student_id: 42,
                store_id: 1,
                product_id: 1001,
            }
        );
        assert_eq!(pending.product_name, "Fried Rice");
        assert_eq!(pending.note.as_deref(), Some("no egg"));
        Ok(())
    }

    #[tokio::test]
    async fn test_queue_number_is_reflected_in_confirmation() -> Result<()> {
        init_test_tracing();
        let state = state_with_menu(7).await;
        let mut api = MockCanteenApi::new();
        api.expect_submit_order()
            .withf(|req| req.product_id == 1001 && req.store_id == 1 && req.student_id == 42)
            .times(1)
            .returning(|_| {
                Ok(OrderReceipt {
                    id: Some(31),
                    queue_number: Some(5),
                })
            });

        let pending = prepare_order(&state, 7, 42, "Fried Rice").await?;
        let confirmation = submit_order(&api, pending).await?;

        assert_eq!(confirmation.queue_number, Some(5));
        let desc = confirmation.description();
        assert!(desc.contains("**🔔 Your queue number: 5**"));
        assert!(desc.contains("`31`"));
        assert!(!desc.contains("**Note:**"));
        Ok(())
    }

    #[tokio::test]
    async fn test_api_rejection_is_forwarded() -> Result<()> {
        let state = state_with_menu(7).await;
        let mut api = MockCanteenApi::new();
        api.expect_submit_order().times(1).returning(|_| {
            Err(Error::Api {
                status: 404,
                body: "Product not found in store".to_string(),
            })
        });

        let pending = prepare_order(&state, 7, 42, "Thai Tea").await?;
        let result = submit_order(&api, pending).await;
        assert!(matches!(result, Err(Error::Api { status: 404, .. })));
        Ok(())
    }

    #[test]
    fn test_description_without_receipt_fields() {
        let confirmation = OrderConfirmation {
            store_name: "Mama".to_string(),
            product_name: "Thai Tea".to_string(),
            note: Some("less sugar".to_string()),
            order_id: None,
            queue_number: None,
        };
        let desc = confirmation.description();
        assert!(desc.contains("**Note:** less sugar"));
        assert!(desc.contains("`N/A`"));
        assert!(desc.contains("Your queue number: N/A"));
    }
}
