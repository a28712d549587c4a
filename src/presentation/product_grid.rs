use leptos::*;
use web_sys::MouseEvent;

use crate::app::use_store;
use crate::application::{ProductCard, cosmetics::Ripple};
use crate::domain::catalog::ProductId;
use crate::infrastructure::{dom, timers};

const SKELETON_CARDS: usize = 8;

/// Skeleton placeholders until the reveal timer fires, then the filtered cards.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_store();

    view! {
        <div id="skeletonGrid" class=move || if store.loading.get() { "product-grid" } else { "product-grid hidden" }>
            {(0..SKELETON_CARDS).map(|_| view! { <div class="skeleton-card animate-pulse"></div> }).collect_view()}
        </div>
        <div id="productGrid" class=move || if store.loading.get() { "product-grid hidden" } else { "product-grid" }>
            <For
                each=move || store.cards.get()
                key=|card| card.id
                children=move |card: ProductCard| view! { <ProductCardView card/> }
            />
        </div>
        <Show when=move || !store.loading.get() && store.cards.with(Vec::is_empty)>
            <p class="empty-state">"No products match your filters."</p>
        </Show>
    }
}

#[component]
pub fn ProductCardView(card: ProductCard) -> impl IntoView {
    let store = use_store();
    let id = card.id;
    let wished = create_rw_signal(false);

    view! {
        <div class="product-card" data-category=card.category.clone()>
            <div class="relative">
                <a href=card.href.clone()>
                    <img src=card.image.clone() alt=card.name.clone() class="w-full h-48 object-cover"/>
                </a>
                <span class="vendor-tag">{card.vendor.clone()}</span>
                {card.badge.clone().map(|badge| view! { <span class="badge">{badge}</span> })}
                <button
                    class="wishlist"
                    aria-label="Toggle wishlist"
                    on:click=move |_| wished.update(|w| *w = !*w)
                >
                    <i class=move || if wished.get() { "fas fa-heart text-red-500" } else { "far fa-heart" }></i>
                </button>
            </div>
            <div class="p-4">
                <h3 class="product-name">
                    <a href=card.href.clone()>{card.name.clone()}</a>
                </h3>
                <p class="vendor">"Sold by: " {card.vendor.clone()}</p>
                <p class="price">{card.price_label.clone()}</p>
                <div class="stars">
                    {card
                        .stars
                        .into_iter()
                        .map(|filled| {
                            let class = if filled { "fas fa-star text-yellow-400" } else { "far fa-star text-yellow-400" };
                            view! { <i class=class></i> }
                        })
                        .collect_view()}
                </div>
                <button class="quick-view-trigger" on:click=move |_| store.open_quick_view(id)>
                    "Quick view"
                </button>
                <AddToCartButton id/>
            </div>
        </div>
    }
}

/// Add-to-cart button with a ripple anchored at the click point.
#[component]
pub fn AddToCartButton(id: ProductId) -> impl IntoView {
    let store = use_store();
    let button = create_node_ref::<html::Button>();
    let ripples = create_rw_signal(Vec::<Ripple>::new());
    let next_ripple = store_value(0u64);

    let on_click = move |ev: MouseEvent| {
        if let Some(el) = button.get_untracked() {
            let (x, y, width, height) = dom::click_within(&ev, &el);
            next_ripple.update_value(|n| *n += 1);
            let ripple = Ripple::at(next_ripple.get_value(), x, y, width, height);
            ripples.update(|r| r.push(ripple));
            timers::after(store.config.with_value(|c| c.ripple_duration_ms), move || {
                let _ = ripples.try_update(|r| r.retain(|other| other.id != ripple.id));
            });
        }
        store.add_to_cart(id);
    };

    view! {
        <button node_ref=button class="add-cart btn-micro" on:click=on_click>
            "Add to cart"
            <For
                each=move || ripples.get()
                key=|ripple| ripple.id
                children=|ripple: Ripple| view! { <span class="ripple" style=ripple.style()></span> }
            />
        </button>
    }
}
