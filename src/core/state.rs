//! Shared bot state: store directory, menu cache and channel bindings.
//!
//! One [`CanteenState`] is owned by the bot data and borrowed by every command
//! and event handler. Each map has its own lock and no lock is held while an
//! HTTP request is in flight, so a slow API never blocks unrelated channels.

use crate::api::CanteenApi;
use crate::core::binding::{ChannelBinding, ChannelBindings};
use crate::core::menu::{Menu, MenuCache};
use crate::core::store::StoreDirectory;
use crate::errors::{Error, Result};
use crate::models::Store;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

/// In-memory state shared by every handler.
#[derive(Debug, Default)]
pub struct CanteenState {
    stores: RwLock<StoreDirectory>,
    menus: RwLock<MenuCache>,
    bindings: RwLock<ChannelBindings>,
}

impl CanteenState {
    /// Empty state; stores load lazily or at startup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads the store directory from the API.
    ///
    /// On failure the previous listing is kept.
    ///
    /// # Errors
    /// Forwards the API error.
    #[instrument(skip_all)]
    pub async fn refresh_stores(&self, api: &dyn CanteenApi) -> Result<usize> {
        match api.list_stores().await {
            Ok(stores) => {
                let count = stores.len();
                self.stores.write().await.replace(stores);
                info!("Store directory refreshed with {} stores", count);
                Ok(count)
            }
            Err(e) => {
                error!("Failed to fetch store list: {}", e);
                Err(e)
            }
        }
    }

    /// Returns the store list, trying one refresh when it is empty.
    ///
    /// # Errors
    /// [`Error::NoStoresAvailable`] if the directory is still empty afterwards.
    pub async fn ensure_stores(&self, api: &dyn CanteenApi) -> Result<Vec<Store>> {
        if self.stores.read().await.is_empty() {
            // A failed refresh is already logged; emptiness is what the caller sees.
            let _ = self.refresh_stores(api).await;
        }
        let stores = self.stores().await;
        if stores.is_empty() {
            return Err(Error::NoStoresAvailable);
        }
        Ok(stores)
    }

    /// Snapshot of the store directory.
    pub async fn stores(&self) -> Vec<Store> {
        self.stores.read().await.all().to_vec()
    }

    /// True once a non-empty listing has been loaded.
    pub async fn has_stores(&self) -> bool {
        !self.stores.read().await.is_empty()
    }

    /// Looks a store up by name, loading the directory first if needed.
    ///
    /// # Errors
    /// [`Error::NoStoresAvailable`] or [`Error::StoreNotFound`].
    pub async fn find_store(&self, api: &dyn CanteenApi, name: &str) -> Result<Store> {
        self.ensure_stores(api).await?;
        self.stores
            .read()
            .await
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| Error::StoreNotFound {
                name: name.trim().to_string(),
            })
    }

    /// Returns a store's menu, fetching and caching it on first use.
    ///
    /// # Errors
    /// Forwards the API error; nothing is cached in that case.
    #[instrument(skip(self, api))]
    pub async fn menu_for(&self, api: &dyn CanteenApi, store_id: i64) -> Result<Arc<Menu>> {
        if let Some(menu) = self.menus.read().await.get(store_id) {
            return Ok(menu);
        }

        let products = api.list_products(store_id).await.inspect_err(|e| {
            warn!("Could not load menu for store {}: {}", store_id, e);
        })?;
        let menu = Menu::from_products(products);
        info!(
            "Cached menu for store {} ({} items)",
            store_id,
            menu.items().len()
        );
        Ok(self.menus.write().await.insert(store_id, menu))
    }

    /// Cache-only menu read.
    pub async fn cached_menu(&self, store_id: i64) -> Option<Arc<Menu>> {
        self.menus.read().await.get(store_id)
    }

    /// Selects `store` for `channel_id`, replacing any earlier choice.
    pub async fn bind_channel(&self, channel_id: u64, store: &Store) {
        let previous = self.bindings.write().await.bind(channel_id, store);
        info!(
            "Channel {} now ordering from {} (was {:?})",
            channel_id,
            store.name,
            previous.map(|b| b.store_name)
        );
    }

    /// Store selected in `channel_id`.
    pub async fn binding(&self, channel_id: u64) -> Option<ChannelBinding> {
        self.bindings.read().await.resolve(channel_id).cloned()
    }

    /// Forgets the selection of a deleted channel.
    pub async fn unbind_channel(&self, channel_id: u64) -> Option<ChannelBinding> {
        let removed = self.bindings.write().await.unbind(channel_id);
        if let Some(binding) = &removed {
            info!(
                "Cleared store binding of deleted channel {} ({})",
                channel_id, binding.store_name
            );
        }
        removed
    }

    /// Owner-triggered reload: fresh store list and an empty menu cache.
    ///
    /// # Errors
    /// Forwards the store listing error. The menu cache is cleared regardless.
    pub async fn reload(&self, api: &dyn CanteenApi) -> Result<usize> {
        self.menus.write().await.clear();
        self.refresh_stores(api).await
    }
}
