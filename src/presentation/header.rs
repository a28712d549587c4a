use leptos::*;

use crate::app::use_store;
use crate::application::cosmetics::{HEADER_HIDDEN_CLASS, badge_class};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let brand = store.config.with_value(|c| c.brand.clone());
    let count = move || store.cart.with(|s| s.badge_count());

    view! {
        <header
            id="topHeader"
            class=move || {
                if store.header_hidden.get() {
                    format!("top-header {}", HEADER_HIDDEN_CLASS)
                } else {
                    "top-header".to_string()
                }
            }
        >
            <button
                id="sidebarToggle"
                class="sidebar-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || store.sidebar.with(|s| s.is_open().to_string())
                on:click=move |_| store.sidebar.update(|s| s.toggle())
            >
                <i class="fas fa-bars"></i>
            </button>
            <a href="/" class="brand">{brand}</a>
            <button
                id="cartBtn"
                class="cart-button"
                on:click=move |ev| {
                    ev.prevent_default();
                    store.navigate("/cart");
                }
            >
                <i class="fas fa-shopping-cart"></i>
                <span id="cartCount" class=move || badge_class(count(), store.badge_pulse.get())>
                    {count}
                </span>
            </button>
        </header>
    }
}
