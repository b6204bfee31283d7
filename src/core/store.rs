//! Store directory - the read-only list of canteen vendors.

use crate::models::Store;

/// Cached copy of `GET /store`, in the order the API returned it.
#[derive(Debug, Default)]
pub struct StoreDirectory {
    stores: Vec<Store>,
}

impl StoreDirectory {
    /// Replaces the whole directory with a fresh listing.
    pub fn replace(&mut self, stores: Vec<Store>) {
        self.stores = stores;
    }

    /// Every store, in API order.
    #[must_use]
    pub fn all(&self) -> &[Store] {
        &self.stores
    }

    /// True before the first successful load.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Finds a store by display name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Store> {
        let wanted = name.trim().to_lowercase();
        self.stores
            .iter()
            .find(|store| store.name.trim().to_lowercase() == wanted)
    }

    /// Store with the given id.
    #[must_use]
    pub fn get(&self, store_id: i64) -> Option<&Store> {
        self.stores.iter().find(|store| store.store_id == store_id)
    }
}

/// Bullet list of store names for chat messages.
#[must_use]
pub fn format_store_list(stores: &[Store]) -> String {
    stores
        .iter()
        .map(|store| format!("• **{}**\n", store.name))
        .collect()
}
