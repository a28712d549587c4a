use leptos::*;

use crate::app::use_store;

const LINKS: [(&str, &str, &str); 4] = [
    ("/", "fas fa-home", "Home"),
    ("/products", "fas fa-store", "Products"),
    ("/cart", "fas fa-shopping-cart", "Cart"),
    ("/dashboard", "fas fa-chart-line", "Dashboard"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_store();

    view! {
        <aside
            id="sidebar"
            class=move || format!("sidebar {}", store.sidebar.with(|s| s.transform_class()))
        >
            <nav>
                {LINKS
                    .iter()
                    .map(|(href, icon, label)| {
                        view! {
                            <a href=*href class="sidebar-link">
                                <i class=*icon></i>
                                " "
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
