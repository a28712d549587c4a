use leptos::*;

use crate::app::use_store;
use crate::application::ProductCard;
use crate::domain::routing::Section;
use crate::presentation::{
    filters::FilterBar,
    product_grid::{AddToCartButton, ProductCardView, ProductGrid},
};

const RELATED_LIMIT: usize = 4;

/// A `<main>` child that is shown only while its section is the active route.
#[component]
fn PageSection(section: Section, children: Children) -> impl IntoView {
    let store = use_store();
    let class = move || {
        if store.route.with(|r| section.is_shown_when(r.section)) { "page-section" } else { "page-section hidden" }
    };

    view! {
        <section id=section.as_ref().to_string() class=class>
            {children()}
        </section>
    }
}

fn card_list(cards: Vec<ProductCard>) -> View {
    cards.into_iter().map(|card| view! { <ProductCardView card/> }).collect_view()
}

#[component]
pub fn HomeSection() -> impl IntoView {
    let store = use_store();
    let featured: Vec<ProductCard> =
        store.catalog.with_value(|c| c.featured().map(ProductCard::from).collect());

    view! {
        <PageSection section=Section::Home>
            <div class="hero-section">
                <h1>"Everything you need, from sellers you trust"</h1>
                <a href="/products" class="cta">"Shop now"</a>
            </div>
            <div class="featured-section">
                <h2>"Featured"</h2>
                <div class="product-grid">{card_list(featured)}</div>
            </div>
        </PageSection>
    }
}

#[component]
pub fn ProductsSection() -> impl IntoView {
    view! {
        <PageSection section=Section::Products>
            <FilterBar/>
            <ProductGrid/>
        </PageSection>
    }
}

#[component]
pub fn CartSection() -> impl IntoView {
    let store = use_store();

    let lines = move || {
        let entries = store.cart.with(|s| s.cart().entries().to_vec());
        if entries.is_empty() {
            return view! { <p class="empty-state">"Your cart is empty."</p> }.into_view();
        }
        entries
            .into_iter()
            .map(|entry| {
                let id = entry.id();
                view! {
                    <div class="cart-line">
                        <a href=format!("/product/{}", id)>{entry.product.name.clone()}</a>
                        <span class="quantity">{format!("× {}", entry.quantity)}</span>
                        <span class="line-total">{entry.line_total().label()}</span>
                        <button class="remove" on:click=move |_| store.remove_from_cart(id)>
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <PageSection section=Section::Cart>
            <h2>"Your cart"</h2>
            <div class="cart-lines">{lines}</div>
            <p class="cart-total">"Total: " {move || store.cart.with(|s| s.cart().total_price().label())}</p>
        </PageSection>
    }
}

#[component]
pub fn DashboardSection() -> impl IntoView {
    let store = use_store();
    let catalog_size = store.catalog.with_value(|c| c.len());

    view! {
        <PageSection section=Section::Dashboard>
            <h2>"Dashboard"</h2>
            <dl class="stats">
                <dt>"Products in catalog"</dt>
                <dd>{catalog_size}</dd>
                <dt>"Cart lines"</dt>
                <dd>{move || store.cart.with(|s| s.cart().entries().len())}</dd>
                <dt>"Items in cart"</dt>
                <dd>{move || store.cart.with(|s| s.badge_count())}</dd>
                <dt>"Cart total"</dt>
                <dd>{move || store.cart.with(|s| s.cart().total_price().label())}</dd>
            </dl>
        </PageSection>
    }
}

#[component]
pub fn ProductDetailSection() -> impl IntoView {
    let store = use_store();

    let detail = move || {
        let product = store.route.with(|r| r.product.clone())?;
        let related: Vec<ProductCard> = store
            .catalog
            .with_value(|c| c.related(&product, RELATED_LIMIT).into_iter().map(ProductCard::from).collect());
        let card = ProductCard::from(&product);
        let related_heading = (!related.is_empty()).then(|| view! { <h2>"Related products"</h2> });
        Some(view! {
            <div class="product-detail">
                <img src=card.image.clone() alt=card.name.clone() class="detail-image"/>
                <div class="detail-body">
                    <h1>{card.name.clone()}</h1>
                    <p class="vendor">"Sold by: " {card.vendor.clone()}</p>
                    <p class="price">{card.price_label.clone()}</p>
                    {product.old_price.map(|old| view! { <p class="old-price">{old.label()}</p> })}
                    {product.discount.clone().map(|d| view! { <span class="discount">{d}</span> })}
                    <p class="category">"Category: " {card.category.clone()}</p>
                    {product.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                    <AddToCartButton id=card.id/>
                </div>
            </div>
            {related_heading}
            <div class="product-grid related">{card_list(related)}</div>
        })
    };

    view! {
        <PageSection section=Section::ProductDetail>
            {detail}
        </PageSection>
    }
}

#[component]
pub fn NotFoundSection() -> impl IntoView {
    let store = use_store();

    view! {
        <PageSection section=Section::NotFound>
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{move || store.route.with(|r| r.path.clone())}</code></p>
            <a href="/">"Back to home"</a>
        </PageSection>
    }
}
