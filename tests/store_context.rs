mod common;

use gloo::storage::{LocalStorage, Storage};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use storefront_wasm::app::StoreContext;
use storefront_wasm::config::StoreConfig;
use storefront_wasm::domain::cart::CartRepository;
use storefront_wasm::domain::catalog::ProductId;
use storefront_wasm::domain::routing::Section;
use storefront_wasm::infrastructure::LocalStorageCartRepository;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn store_config(key: &str) -> StoreConfig {
    StoreConfig {
        cart_storage_key: key.to_string(),
        skeleton_delay_ms: 20,
        filter_debounce_ms: 30,
        toast_duration_ms: 60,
        badge_pulse_ms: 200,
        ..StoreConfig::default()
    }
}

fn fresh_store(key: &str) -> StoreContext {
    LocalStorage::delete(key);
    StoreContext::new(store_config(key), common::demo_catalog())
}

fn history_length() -> u32 {
    window().history().unwrap().length().unwrap()
}

fn current_path() -> String {
    window().location().pathname().unwrap()
}

fn restore_path(path: &str) {
    window().history().unwrap().replace_state_with_url(&JsValue::NULL, "", Some(path)).unwrap();
}

fn stored_lines(key: &str) -> Option<usize> {
    LocalStorageCartRepository::new(key).load().unwrap().map(|entries| entries.len())
}

#[wasm_bindgen_test]
fn navigate_pushes_and_replay_does_not() {
    let runtime = create_runtime();
    let original = current_path();
    let store = fresh_store("storefront_ctx_nav");

    let before = history_length();
    store.navigate("/cart");
    assert_eq!(history_length(), before + 1);
    assert_eq!(current_path(), "/cart");
    assert_eq!(document().title(), "Cart - JanCommerce");
    assert_eq!(store.route.get_untracked().section, Section::Cart);

    store.replay("/product/3");
    assert_eq!(history_length(), before + 1);
    assert_eq!(store.route.get_untracked().section, Section::ProductDetail);
    assert_eq!(document().title(), "Premium Product 3 - JanCommerce");

    store.replay("/product/999");
    assert_eq!(store.route.get_untracked().section, Section::NotFound);

    restore_path(&original);
    runtime.dispose();
}

#[wasm_bindgen_test(async)]
async fn add_toasts_and_pulses_only_for_known_products() {
    let runtime = create_runtime();
    let key = "storefront_ctx_cart";
    let store = fresh_store(key);

    store.add_to_cart(ProductId::from(999));
    assert!(store.toasts.with_untracked(|q| q.toasts().is_empty()));
    assert!(!store.badge_pulse.get_untracked());
    assert_eq!(stored_lines(key), None);

    store.add_to_cart(ProductId::from(2));
    store.add_to_cart(ProductId::from(2));
    assert_eq!(store.cart.with_untracked(|c| c.badge_count()), 2);
    assert_eq!(store.toasts.with_untracked(|q| q.toasts().len()), 2);
    assert!(store.badge_pulse.get_untracked());
    assert_eq!(stored_lines(key), Some(1));

    sleep(Duration::from_millis(300)).await;
    assert!(!store.badge_pulse.get_untracked());
    assert!(store.toasts.with_untracked(|q| q.toasts().is_empty()));

    store.remove_from_cart(ProductId::from(2));
    assert_eq!(store.cart.with_untracked(|c| c.badge_count()), 0);
    assert_eq!(stored_lines(key), Some(0));

    LocalStorage::delete(key);
    runtime.dispose();
}

#[wasm_bindgen_test(async)]
async fn later_add_restarts_badge_pulse() {
    let runtime = create_runtime();
    let key = "storefront_ctx_pulse";
    let store = fresh_store(key);

    store.add_to_cart(ProductId::from(1));
    sleep(Duration::from_millis(120)).await;
    store.add_to_cart(ProductId::from(1));
    sleep(Duration::from_millis(120)).await;
    // 240ms after the first add, 120ms after the second.
    assert!(store.badge_pulse.get_untracked());

    sleep(Duration::from_millis(200)).await;
    assert!(!store.badge_pulse.get_untracked());

    LocalStorage::delete(key);
    runtime.dispose();
}

#[wasm_bindgen_test(async)]
async fn filter_burst_rebuilds_cards_once() {
    let runtime = create_runtime();
    let store = fresh_store("storefront_ctx_filter");
    assert_eq!(store.cards.with_untracked(Vec::len), 12);

    for category in ["Fashion", "Sports", "Home"] {
        store.filter.update(|f| f.set_category(category));
        store.schedule_render();
    }
    assert!(store.filtering.get_untracked());
    assert_eq!(store.cards.with_untracked(Vec::len), 12);

    sleep(Duration::from_millis(80)).await;
    assert!(!store.filtering.get_untracked());
    let names: Vec<String> = store.cards.with_untracked(|cards| cards.iter().map(|c| c.name.clone()).collect());
    assert_eq!(names, ["Premium Product 2", "Premium Product 6", "Premium Product 10"]);

    // Nothing else is queued behind the rebuild that ran.
    store.cards.set(Vec::new());
    sleep(Duration::from_millis(80)).await;
    assert!(store.cards.with_untracked(Vec::is_empty));

    runtime.dispose();
}

#[wasm_bindgen_test(async)]
async fn start_reveals_grid_and_teardown_cancels_timers() {
    let runtime = create_runtime();
    let original = current_path();
    let key = "storefront_ctx_lifecycle";
    let store = fresh_store(key);
    assert!(store.loading.get_untracked());

    store.start();
    sleep(Duration::from_millis(60)).await;
    assert!(!store.loading.get_untracked());

    store.add_to_cart(ProductId::from(4));
    assert!(store.badge_pulse.get_untracked());
    store.teardown();
    sleep(Duration::from_millis(300)).await;
    // The pulse reset was cancelled with the session.
    assert!(store.badge_pulse.get_untracked());

    restore_path(&original);
    LocalStorage::delete(key);
    runtime.dispose();
}
