//! Client side of the canteen ordering API.
//!
//! Commands never talk to `reqwest` directly; they go through [`CanteenApi`] so
//! the ordering flow can be exercised without a live service.

mod http;

pub use http::HttpCanteenApi;

use crate::errors::Result;
use crate::models::{OrderReceipt, OrderRequest, Product, Store};
use async_trait::async_trait;

/// Operations the bot needs from the ordering service.
///
/// Non-success statuses surface as [`Error::Api`](crate::errors::Error::Api),
/// transport failures as [`Error::Http`](crate::errors::Error::Http).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CanteenApi: Send + Sync {
    /// `GET /store`
    async fn list_stores(&self) -> Result<Vec<Store>>;

    /// `GET /store/product?store_id=<id>`
    async fn list_products(&self, store_id: i64) -> Result<Vec<Product>>;

    /// `POST /orders/add`
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderReceipt>;
}
