//! Wire records exchanged with the canteen ordering API.
//!
//! The bot only ever holds read-only copies of stores and products; orders are
//! built, sent and forgotten.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A restaurant vendor in the canteen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Store {
    /// Identifier used in product and order requests
    pub store_id: i64,
    /// Display name, matched case-insensitively by `/menu`
    pub name: String,
    /// Link to a menu picture; stores without one get a text menu.
    #[serde(default)]
    pub menu_url: Option<String>,
}

/// An item sold by exactly one store.
///
/// The API may send `null` for any field but the id; such values decode as
/// defaults and unnamed products are later left off the menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Identifier sent back in `POST /orders/add`
    pub product_id: i64,
    /// Owning store
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_id: i64,
    /// Display name; blank when the API has none
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Price in baht
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Body of `POST /orders/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Discord user id of the person ordering.
    pub student_id: u64,
    /// Store selected in the ticket channel
    pub store_id: i64,
    /// Product matched on that store's menu
    pub product_id: i64,
}

/// Response of `POST /orders/add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderReceipt {
    /// Order number assigned by the API
    #[serde(default)]
    pub id: Option<i64>,
    /// Position in the store's pickup queue
    #[serde(default)]
    pub queue_number: Option<i64>,
}
