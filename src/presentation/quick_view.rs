use leptos::*;

use crate::app::use_store;
use crate::presentation::product_grid::AddToCartButton;

/// The one quick-view overlay. Mounted once by `App`; triggers only swap its content.
#[component]
pub fn QuickViewOverlay() -> impl IntoView {
    let store = use_store();

    view! {
        <div
            id="quickView"
            class=move || if store.quick_view.with(|q| q.is_visible()) { "quick-view" } else { "quick-view hidden" }
        >
            <div class="quick-view-panel">
                <div class="quick-view-header">
                    <h2 id="qvTitle">
                        {move || store.quick_view.with(|q| q.content().map(|c| c.name.clone()))}
                    </h2>
                    <button id="qvClose" aria-label="Close" on:click=move |_| store.close_quick_view()>
                        "×"
                    </button>
                </div>
                <div id="qvContent">
                    {move || {
                        store
                            .quick_view
                            .with(|q| q.content().cloned())
                            .map(|content| {
                                view! {
                                    <img src=content.image alt=content.name.clone() class="w-full"/>
                                    <p class="mt-2">"Price: " {content.price_label}</p>
                                    <p class="mt-1">"Category: " {content.category}</p>
                                    <AddToCartButton id=content.id/>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
