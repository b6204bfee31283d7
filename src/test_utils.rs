//! Shared test utilities for the canteen bot.
//!
//! Provides sample stores and menus plus a ready-made state with a bound
//! ticket channel.

use crate::config::verification::{StudentEntry, VerificationConfig};
use crate::core::CanteenState;
use crate::models::{Product, Store};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness; safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Two stores: Mama (id 1, text menu) and KFC (id 2, picture menu).
pub fn sample_stores() -> Vec<Store> {
    vec![
        Store {
            store_id: 1,
            name: "Mama".to_string(),
            menu_url: None,
        },
        Store {
            store_id: 2,
            name: "KFC".to_string(),
            menu_url: Some("https://img.example/kfc.jpg".to_string()),
        },
    ]
}

/// A single product with the given fields.
pub fn product(product_id: i64, store_id: i64, name: &str, price: f64) -> Product {
    Product {
        product_id,
        store_id,
        name: name.to_string(),
        price,
    }
}

/// Three items with ids `store_id * 1000 + n`, the way the API numbers them.
pub fn sample_products(store_id: i64) -> Vec<Product> {
    let base = store_id * 1000;
    vec![
        product(base + 1, store_id, "Fried Rice", 45.0),
        product(base + 2, store_id, "Pad Kra Pao", 50.0),
        product(base + 3, store_id, "Thai Tea", 20.0),
    ]
}

/// State with `channel_id` bound to Mama and Mama's menu cached.
///
/// # Panics
/// If the mocked menu fails to load.
pub async fn state_with_menu(channel_id: u64) -> CanteenState {
    let mut api = crate::api::MockCanteenApi::new();
    api.expect_list_products()
        .returning(|store_id| Ok(sample_products(store_id)));

    let state = CanteenState::new();
    let stores = sample_stores();
    let mama = &stores[0];
    state.bind_channel(channel_id, mama).await;
    let menu = state.menu_for(&api, mama.store_id).await;
    assert!(menu.is_ok_and(|m| !m.is_empty()));
    state
}

/// Faculty `07` registry with two students.
pub fn sample_verification_config() -> VerificationConfig {
    VerificationConfig {
        faculty_code: "07".to_string(),
        role_name: "Student".to_string(),
        students: vec![
            StudentEntry {
                id: "65070001".to_string(),
                name: "Somchai Jaidee".to_string(),
            },
            StudentEntry {
                id: "66070123".to_string(),
                name: "Malee Sukjai".to_string(),
            },
        ],
    }
}
