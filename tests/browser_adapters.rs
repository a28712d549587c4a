use gloo::storage::{LocalStorage, Storage};
use gloo::utils::format::JsValueSerdeExt;
use leptos::ev;
use storefront_wasm::application::StoreSession;
use storefront_wasm::domain::cart::{Cart, CartRepository};
use storefront_wasm::domain::catalog::product;
use storefront_wasm::domain::routing::HistoryEntry;
use storefront_wasm::event_utils::ListenerOptions;
use storefront_wasm::infrastructure::{BrowserHistory, LocalStorageCartRepository};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let key = "storefront_test_cart_round_trip";
    LocalStorage::delete(key);
    let mut repo = LocalStorageCartRepository::new(key);
    assert_eq!(repo.load(), Ok(None));

    let mut cart = Cart::new();
    let lamp = product(1, "Lamp", "Home", 12.0);
    cart.add(&lamp);
    cart.add(&lamp);
    repo.save(cart.entries()).unwrap();

    let loaded = repo.load().unwrap().expect("stored");
    assert_eq!(Cart::from_entries(loaded), cart);
    LocalStorage::delete(key);
}

#[wasm_bindgen_test]
fn corrupt_local_storage_is_an_error_not_a_panic() {
    let key = "storefront_test_cart_corrupt";
    LocalStorage::raw().set_item(key, "{oops").unwrap();
    let repo = LocalStorageCartRepository::new(key);
    assert!(repo.load().is_err());
    LocalStorage::delete(key);
}

#[wasm_bindgen_test]
fn popstate_state_restores_route() {
    let state = JsValue::from_serde(&HistoryEntry::new("/cart")).unwrap();
    assert_eq!(BrowserHistory::restored_route(&state), "/cart");
    assert_eq!(BrowserHistory::restored_route(&JsValue::NULL), "/");
}

#[wasm_bindgen_test]
fn session_teardown_releases_listeners() {
    let mut session = StoreSession::new();
    session.listen(ev::scroll, ListenerOptions::default(), |_| {});
    session.listen(ev::popstate, ListenerOptions::default(), |_| {});
    assert_eq!(session.listener_count(), 2);

    session.teardown();
    assert_eq!(session.listener_count(), 0);
    assert!(session.is_torn_down());
    session.teardown();

    session.listen(ev::scroll, ListenerOptions::default(), |_| {});
    assert_eq!(session.listener_count(), 0);
}
