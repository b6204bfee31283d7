use crate::api::CanteenApi;
use crate::config::app::ApiConfig;
use crate::errors::{Error, Result};
use crate::models::{OrderReceipt, OrderRequest, Product, Store};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// [`CanteenApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpCanteenApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCanteenApi {
    /// Builds a client for the API described by `config`.
    ///
    /// # Errors
    /// Returns [`Error::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-success status into [`Error::Api`] with the raw body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Builds [`Error::Api`] from a rejected response. A body that cannot be read
/// is reported by its read error instead of as an empty string.
fn api_error<E: std::fmt::Display>(status: u16, body: std::result::Result<String, E>) -> Error {
    let body = match body {
        Ok(body) => body.trim().to_string(),
        Err(e) => {
            warn!("Could not read error body for status {}: {}", status, e);
            format!("(response body unreadable: {e})")
        }
    };
    warn!("Ordering API answered {}: {}", status, body);
    Error::Api { status, body }
}

#[async_trait]
impl CanteenApi for HttpCanteenApi {
    #[instrument(skip(self))]
    async fn list_stores(&self) -> Result<Vec<Store>> {
        let response = self.client.get(self.url("/store")).send().await?;
        let stores: Vec<Store> = Self::decode(response).await?;
        debug!("Fetched {} stores", stores.len());
        Ok(stores)
    }

    #[instrument(skip(self))]
    async fn list_products(&self, store_id: i64) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(self.url("/store/product"))
            .query(&[("store_id", store_id)])
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderReceipt> {
        let response = self
            .client
            .post(self.url("/orders/add"))
            .json(order)
            .send()
            .await?;
        Self::decode(response).await
    }
}
