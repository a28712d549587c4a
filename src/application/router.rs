use crate::config::StoreConfig;
use crate::domain::{
    catalog::{Catalog, Product},
    logging::LogComponent,
    routing::{HistoryEntry, HistoryPort, Route, Section},
};
use crate::{log_debug, log_warn};
use std::rc::Rc;

/// Outcome of a dispatch: which section to show and what to put in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub path: String,
    pub route: Route,
    pub section: Section,
    pub title: String,
    /// Set only for a product detail view.
    pub product: Option<Product>,
}

/// Maps paths to page sections and keeps browser history in step.
pub struct ViewRouter<H: HistoryPort> {
    history: H,
    catalog: Rc<Catalog>,
    brand: String,
}

impl<H: HistoryPort> ViewRouter<H> {
    pub fn new(history: H, catalog: Rc<Catalog>, config: &StoreConfig) -> Self {
        Self { history, catalog, brand: config.brand.clone() }
    }

    /// Record `path` in history, then dispatch to it.
    pub fn navigate(&mut self, path: &str) -> RouteView {
        if let Err(e) = self.history.push(&HistoryEntry::new(path)) {
            log_warn!(LogComponent::Application("Router"), "History push for {} failed: {}", path, e);
        }
        self.handle_route(path)
    }

    /// Dispatch without touching history; used for back/forward replay.
    pub fn handle_route(&self, path: &str) -> RouteView {
        let view = self.resolve(path);
        log_debug!(LogComponent::Application("Router"), "{} -> {}", path, view.section.as_ref());
        view
    }

    pub fn resolve(&self, path: &str) -> RouteView {
        let route = Route::parse(path);
        let (section, product) = match &route {
            Route::Home => (Section::Home, None),
            Route::Products => (Section::Products, None),
            Route::Cart => (Section::Cart, None),
            Route::Dashboard => (Section::Dashboard, None),
            Route::Product(id) => match id.and_then(|id| self.catalog.find(id)) {
                Some(product) => (Section::ProductDetail, Some(product.clone())),
                None => (Section::NotFound, None),
            },
            Route::NotFound(_) => (Section::NotFound, None),
        };
        let page = product.as_ref().map_or(section.title(), |p| p.name.as_str());
        RouteView {
            path: path.to_string(),
            title: format!("{} - {}", page, self.brand),
            route,
            section,
            product,
        }
    }
}
