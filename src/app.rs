use leptos::*;
use std::rc::Rc;
use web_sys::{MouseEvent, PopStateEvent};

use crate::{
    application::{
        CartChange, CartStore, ProductCard, ProductFilterView, RouteView, StoreSession, ViewRouter,
        cosmetics::{QuickView, ScrollTracker, SidebarState, ToastQueue},
    },
    config::StoreConfig,
    domain::{
        catalog::{Catalog, ProductId},
        logging::LogComponent,
        routing::Section,
    },
    event_utils::ListenerOptions,
    infrastructure::{BrowserHistory, Debouncer, LocalStorageCartRepository, dom, timers},
    log_debug,
    presentation::{
        header::Header,
        quick_view::QuickViewOverlay,
        sections::{
            CartSection, DashboardSection, HomeSection, NotFoundSection, ProductDetailSection, ProductsSection,
        },
        sidebar::Sidebar,
        toast::ToastStack,
    },
};

/// Everything the components share. Each piece of state has exactly one owner
/// here; components receive it through Leptos context instead of globals.
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub config: StoredValue<StoreConfig>,
    pub catalog: StoredValue<Rc<Catalog>>,
    pub router: StoredValue<ViewRouter<BrowserHistory>>,
    pub route: RwSignal<RouteView>,
    pub cart: RwSignal<CartStore<LocalStorageCartRepository>>,
    pub filter: RwSignal<ProductFilterView>,
    pub cards: RwSignal<Vec<ProductCard>>,
    pub quick_view: RwSignal<QuickView>,
    pub toasts: RwSignal<ToastQueue>,
    pub sidebar: RwSignal<SidebarState>,
    pub header_hidden: RwSignal<bool>,
    pub badge_pulse: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub filtering: RwSignal<bool>,
    scroll: StoredValue<ScrollTracker>,
    filter_debouncer: StoredValue<Debouncer>,
    skeleton_timer: StoredValue<Debouncer>,
    badge_pulse_timer: StoredValue<Debouncer>,
    session: StoredValue<StoreSession>,
}

impl StoreContext {
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        let catalog = Rc::new(catalog);
        let filter = ProductFilterView::new(Rc::clone(&catalog), config.default_price_max);
        let cards = filter.render();
        let router = ViewRouter::new(BrowserHistory::new(), Rc::clone(&catalog), &config);
        let initial = router.resolve("/");
        let cart = CartStore::load(LocalStorageCartRepository::new(config.cart_storage_key.clone()));
        let filter_debouncer = Debouncer::new(config.filter_debounce_ms);
        let skeleton_timer = Debouncer::new(config.skeleton_delay_ms);
        let badge_pulse_timer = Debouncer::new(config.badge_pulse_ms);

        Self {
            config: store_value(config),
            catalog: store_value(catalog),
            router: store_value(router),
            route: create_rw_signal(initial),
            cart: create_rw_signal(cart),
            filter: create_rw_signal(filter),
            cards: create_rw_signal(cards),
            quick_view: create_rw_signal(QuickView::default()),
            toasts: create_rw_signal(ToastQueue::default()),
            sidebar: create_rw_signal(SidebarState::default()),
            header_hidden: create_rw_signal(false),
            badge_pulse: create_rw_signal(false),
            loading: create_rw_signal(true),
            filtering: create_rw_signal(false),
            scroll: store_value(ScrollTracker::default()),
            filter_debouncer: store_value(filter_debouncer),
            skeleton_timer: store_value(skeleton_timer),
            badge_pulse_timer: store_value(badge_pulse_timer),
            session: store_value(StoreSession::new()),
        }
    }

    /// Attach window listeners, dispatch the current location and start the
    /// skeleton reveal.
    pub fn start(self) {
        self.session.update_value(|session| {
            session.listen(ev::popstate, ListenerOptions::default(), move |e: PopStateEvent| {
                self.replay(&BrowserHistory::restored_route(&e.state()));
            });
            session.listen(ev::scroll, ListenerOptions::default(), move |_| {
                let mut hidden = false;
                self.scroll.update_value(|tracker| hidden = tracker.observe(dom::scroll_offset()));
                self.header_hidden.set(hidden);
            });
            self.filter_debouncer.with_value(|d| session.track(d));
            self.skeleton_timer.with_value(|d| session.track(d));
            self.badge_pulse_timer.with_value(|d| session.track(d));
        });

        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        self.replay(&path);

        self.skeleton_timer.with_value(|timer| timer.schedule(move || self.loading.set(false)));
    }

    pub fn teardown(self) {
        self.session.update_value(StoreSession::teardown);
    }

    pub fn navigate(self, path: &str) {
        let mut view = None;
        self.router.update_value(|router| view = Some(router.navigate(path)));
        if let Some(view) = view {
            self.show(view);
        }
    }

    /// Back/forward restoration: dispatch without pushing history.
    pub fn replay(self, path: &str) {
        let view = self.router.with_value(|router| router.handle_route(path));
        self.show(view);
    }

    fn show(self, view: RouteView) {
        match view.section {
            Section::Cart => {
                log_debug!(
                    LogComponent::Presentation("Router"),
                    "Rendering cart with {} lines",
                    self.cart.with_untracked(|c| c.cart().entries().len())
                );
            }
            Section::Dashboard => {
                log_debug!(LogComponent::Presentation("Router"), "Rendering dashboard");
            }
            Section::ProductDetail => {
                log_debug!(
                    LogComponent::Presentation("Router"),
                    "Rendering product detail: {:?}",
                    view.product.as_ref().map(|p| &p.name)
                );
            }
            Section::NotFound => {
                log_debug!(LogComponent::Presentation("Router"), "Rendering 404 for {}", view.path);
            }
            Section::Home | Section::Products => {}
        }
        dom::set_document_title(&view.title);
        self.route.set(view);
    }

    pub fn add_to_cart(self, id: ProductId) {
        let catalog = self.catalog.get_value();
        let change = self.cart.try_update(|store| store.add(&catalog, id)).flatten();
        if let Some(CartChange::Added { .. }) = change {
            self.toast("Product added to cart!");
            self.pulse_badge();
        }
    }

    pub fn remove_from_cart(self, id: ProductId) {
        self.cart.update(|store| {
            store.remove(id);
        });
    }

    pub fn open_quick_view(self, id: ProductId) {
        let catalog = self.catalog.get_value();
        self.quick_view.update(|qv| {
            qv.open(&catalog, id);
        });
    }

    pub fn close_quick_view(self) {
        self.quick_view.update(QuickView::close);
    }

    pub fn toast(self, message: &str) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|q| q.push(message)) else {
            return;
        };
        timers::after(self.config.with_value(|c| c.toast_duration_ms), move || {
            let _ = toasts.try_update(|q| q.dismiss(id));
        });
    }

    /// A newer add restarts the pulse instead of stacking another reset.
    fn pulse_badge(self) {
        let pulse = self.badge_pulse;
        pulse.set(true);
        self.badge_pulse_timer.with_value(|timer| {
            timer.schedule(move || {
                let _ = pulse.try_set(false);
            })
        });
    }

    /// Filter controls mutate the state right away; the grid is rebuilt once
    /// the controls settle. A newer change replaces the pending rebuild.
    pub fn schedule_render(self) {
        self.filtering.set(true);
        let (filter, cards, filtering) = (self.filter, self.cards, self.filtering);
        self.filter_debouncer.with_value(|debouncer| {
            debouncer.schedule(move || {
                cards.set(filter.with_untracked(|f| f.render()));
                filtering.set(false);
            })
        });
    }
}

pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}

const STYLES: &str = r#"
.hidden { display: none !important; }
.top-header { position: sticky; top: 0; z-index: 30; transition: transform 0.3s ease; }
.-translate-y-full { transform: translateY(-100%); }
.sidebar { position: fixed; top: 0; left: 0; height: 100%; width: 16rem; z-index: 40; transition: transform 0.3s ease; }
.translate-x-0 { transform: translateX(0); }
.-translate-x-full { transform: translateX(-100%); }
.cart-badge { display: inline-block; transition: transform 0.2s ease; }
.scale-0 { transform: scale(0); }
.scale-100 { transform: scale(1); }
.scale-110 { transform: scale(1.1); }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; }
.product-card { position: relative; border-radius: 0.5rem; overflow: hidden; }
.add-cart { position: relative; overflow: hidden; }
.ripple { position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; }
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
.toast-stack { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; display: flex; flex-direction: column; gap: 0.5rem; }
.quick-view { position: fixed; inset: 0; z-index: 40; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5); }
"#;

/// 🛒 Storefront root: header, sidebar, the six page sections and overlays.
#[component]
pub fn App(config: StoreConfig, catalog: Catalog) -> impl IntoView {
    let store = StoreContext::new(config, catalog);
    provide_context(store);
    store.start();
    on_cleanup(move || store.teardown());

    // Same-origin links are routed in-page; everything else keeps default behavior.
    let on_click = move |ev: MouseEvent| {
        if !dom::is_plain_click(&ev) {
            return;
        }
        if let Some(href) = dom::internal_link_target(&ev) {
            ev.prevent_default();
            store.navigate(&href);
        }
    };

    view! {
        <style>{STYLES}</style>
        <div class="storefront" on:click=on_click>
            <Header/>
            <Sidebar/>
            <main>
                <HomeSection/>
                <ProductsSection/>
                <CartSection/>
                <DashboardSection/>
                <ProductDetailSection/>
                <NotFoundSection/>
            </main>
            <QuickViewOverlay/>
            <ToastStack/>
        </div>
    }
}
