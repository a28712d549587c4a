use leptos::*;

use crate::app::use_store;

/// Category dropdown, price slider and search box, all feeding one FilterState.
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_store();
    let options = store.filter.with_untracked(|f| f.category_options());
    let slider_max = store.filter.with_untracked(|f| f.price_ceiling()).to_string();

    view! {
        <div class="filter-bar">
            <select
                id="categoryFilter"
                on:change=move |ev| {
                    let category = event_target_value(&ev);
                    store.filter.update(|f| f.set_category(&category));
                    store.schedule_render();
                }
            >
                {options
                    .into_iter()
                    .map(|category| {
                        let label = category.clone();
                        view! { <option value=category>{label}</option> }
                    })
                    .collect_view()}
            </select>
            <label class="price-filter">
                "Max price "
                <input
                    id="priceRange"
                    type="range"
                    min="0"
                    max=slider_max
                    prop:value=move || store.filter.with(|f| f.state().price_max.value().to_string())
                    on:input=move |ev| {
                        if let Ok(price_max) = event_target_value(&ev).parse::<f64>() {
                            store.filter.update(|f| f.set_price_max(price_max));
                            store.schedule_render();
                        }
                    }
                />
                <span id="priceValue">{move || store.filter.with(|f| f.price_max_label())}</span>
            </label>
            <input
                type="search"
                class="search-input"
                placeholder="Search products..."
                on:input=move |ev| {
                    let search = event_target_value(&ev);
                    store.filter.update(|f| f.set_search(&search));
                    store.schedule_render();
                }
            />
            <div id="pageSpinner" class=move || if store.filtering.get() { "spinner" } else { "spinner hidden" }>
                <i class="fas fa-spinner fa-spin"></i>
            </div>
        </div>
    }
}
