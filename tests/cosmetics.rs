mod common;

use storefront_wasm::application::cosmetics::{
    QuickView, Ripple, ScrollTracker, SidebarState, ToastQueue, badge_class,
};
use storefront_wasm::domain::catalog::ProductId;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn sidebar_toggles_between_two_transforms() {
    let mut sidebar = SidebarState::default();
    assert_eq!(sidebar.transform_class(), "-translate-x-full");
    sidebar.toggle();
    assert!(sidebar.is_open());
    assert_eq!(sidebar.transform_class(), "translate-x-0");
    sidebar.toggle();
    assert_eq!(sidebar, SidebarState::default());
}

#[wasm_bindgen_test]
fn header_follows_last_two_scroll_samples() {
    let mut tracker = ScrollTracker::default();
    assert!(tracker.observe(120.0));
    assert!(tracker.observe(130.0));
    assert!(!tracker.observe(90.0));
    // Same offset counts as "not scrolling down".
    assert!(!tracker.observe(90.0));
    assert!(tracker.observe(90.5));
}

#[wasm_bindgen_test]
fn quick_view_shows_one_product_at_a_time() {
    let catalog = common::demo_catalog();
    let mut overlay = QuickView::default();
    assert!(!overlay.is_visible());

    assert!(overlay.open(&catalog, ProductId::from(2)));
    assert!(overlay.open(&catalog, ProductId::from(3)));
    let content = overlay.content().expect("visible");
    assert_eq!(content.name, "Premium Product 3");
    assert_eq!(content.price_label, "$17.50");
    assert_eq!(content.category, "Sports");

    assert!(!overlay.open(&catalog, ProductId::from(404)));
    assert_eq!(overlay.content().map(|c| c.id), Some(ProductId::from(3)));

    overlay.close();
    assert!(!overlay.is_visible());
}

#[wasm_bindgen_test]
fn ripple_is_centered_on_click_and_spans_larger_side() {
    let ripple = Ripple::at(1, 30.0, 10.0, 120.0, 40.0);
    assert_eq!(ripple.size, 120.0);
    assert_eq!(ripple.left, -30.0);
    assert_eq!(ripple.top, -50.0);
    assert_eq!(ripple.style(), "width:120px;height:120px;left:-30px;top:-50px");
}

#[wasm_bindgen_test]
fn toasts_dismiss_individually() {
    let mut queue = ToastQueue::default();
    let first = queue.push("Product added to cart!");
    let second = queue.push("Product added to cart!");
    assert_ne!(first, second);
    queue.dismiss(first);
    assert_eq!(queue.toasts().len(), 1);
    assert_eq!(queue.toasts()[0].id, second);
}

#[wasm_bindgen_test]
fn badge_hidden_at_zero_and_pulses_otherwise() {
    assert_eq!(badge_class(0, true), "cart-badge scale-0");
    assert_eq!(badge_class(2, true), "cart-badge scale-110");
    assert_eq!(badge_class(2, false), "cart-badge scale-100");
}
