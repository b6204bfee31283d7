//! Menu cache - each store's product list, fetched once and kept for the
//! lifetime of the process.

use crate::models::Product;
use std::collections::HashMap;
use std::sync::Arc;

/// Normalises a product name for lookups.
#[must_use]
pub fn menu_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Formats a price the way menus show it.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// Products of a single store, looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Menu {
    /// Builds a menu, skipping unnamed products. A later product with the same
    /// normalised name replaces the earlier one in place.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut menu = Self::default();
        for product in products {
            if product.name.trim().is_empty() {
                continue;
            }
            let key = menu_key(&product.name);
            if let Some(&pos) = menu.index.get(&key) {
                menu.items[pos] = product;
            } else {
                menu.index.insert(key, menu.items.len());
                menu.items.push(product);
            }
        }
        menu
    }

    /// Case-insensitive lookup by product name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.index.get(&menu_key(name)).map(|&pos| &self.items[pos])
    }

    /// Items in the order the API listed them.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// True when no product had a name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Product names that contain `partial`, for autocomplete.
    #[must_use]
    pub fn names_matching(&self, partial: &str) -> Vec<String> {
        let partial = menu_key(partial);
        self.items
            .iter()
            .filter(|p| menu_key(&p.name).contains(&partial))
            .map(|p| p.name.clone())
            .collect()
    }

    /// One line per item, used when a store has no menu picture.
    #[must_use]
    pub fn render_lines(&self) -> String {
        self.items
            .iter()
            .map(|p| format!("- **{}** ({} baht)", p.name, format_price(p.price)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Store id -> menu. Entries never expire; only [`MenuCache::clear`] drops them.
#[derive(Debug, Default)]
pub struct MenuCache {
    menus: HashMap<i64, Arc<Menu>>,
}

impl MenuCache {
    /// Cached menu of `store_id`, if any.
    #[must_use]
    pub fn get(&self, store_id: i64) -> Option<Arc<Menu>> {
        self.menus.get(&store_id).cloned()
    }

    /// Caches `menu` and returns the shared handle.
    pub fn insert(&mut self, store_id: i64, menu: Menu) -> Arc<Menu> {
        let menu = Arc::new(menu);
        self.menus.insert(store_id, Arc::clone(&menu));
        menu
    }

    /// Forgets every menu.
    pub fn clear(&mut self) {
        self.menus.clear();
    }

    /// Number of cached menus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{product, sample_products};

    #[test]
    fn test_every_case_variant_finds_same_product() {
        let menu = Menu::from_products(sample_products(1));
        let expected = menu.find("Fried Rice").unwrap().clone();

        for variant in ["fried rice", "FRIED RICE", "fRiEd RiCe", "  Fried Rice  "] {
            assert_eq!(menu.find(variant), Some(&expected), "variant {variant:?}");
        }
    }

    #[test]
    fn test_unnamed_products_are_skipped() {
        let menu = Menu::from_products(vec![product(1, 1, "", 10.0), product(2, 1, "Tea", 15.0)]);
        assert_eq!(menu.items().len(), 1);
        assert_eq!(menu.items()[0].name, "Tea");
    }

    #[test]
    fn test_duplicate_names_keep_position_and_last_value() {
        let menu = Menu::from_products(vec![
            product(1, 1, "Tea", 15.0),
            product(2, 1, "Coffee", 20.0),
            product(3, 1, "TEA", 18.0),
        ]);
        assert_eq!(menu.items().len(), 2);
        assert_eq!(menu.items()[0].product_id, 3);
        assert_eq!(menu.find("tea").unwrap().price, 18.0);
    }

    #[test]
    fn test_render_lines_preserves_api_order() {
        let menu = Menu::from_products(vec![
            product(1, 1, "Fried Rice", 45.0),
            product(2, 1, "Iced Tea", 12.5),
        ]);
        assert_eq!(
            menu.render_lines(),
            "- **Fried Rice** (45 baht)\n- **Iced Tea** (12.50 baht)"
        );
    }

    #[test]
    fn test_names_matching() {
        let menu = Menu::from_products(sample_products(1));
        assert_eq!(menu.names_matching("rice"), vec!["Fried Rice".to_string()]);
        assert_eq!(menu.names_matching("").len(), menu.items().len());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = MenuCache::default();
        cache.insert(1, Menu::from_products(sample_products(1)));
        assert!(cache.get(1).is_some());
        assert!(cache.get(2).is_none());

        cache.clear();
        assert!(cache.is_empty());
    }
}
