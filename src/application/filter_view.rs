use crate::domain::{
    catalog::{Catalog, MAX_STARS, Product, ProductId},
    filter::{ALL_CATEGORIES, FilterState},
};
use serde::Serialize;
use std::rc::Rc;

/// View-model for one grid card; the rendering layer builds markup from this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub vendor: String,
    pub category: String,
    pub image: String,
    pub price_label: String,
    pub stars: [bool; MAX_STARS],
    pub badge: Option<String>,
    pub href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            vendor: product.vendor.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price_label: product.price.label(),
            stars: product.rating.stars(),
            badge: product.badge().map(str::to_string),
            href: format!("/product/{}", product.id),
        }
    }
}

/// Owns the filter criteria and derives the visible cards from the catalog.
pub struct ProductFilterView {
    catalog: Rc<Catalog>,
    state: FilterState,
    price_ceiling: f64,
}

impl ProductFilterView {
    /// The cap starts at `default_cap`, raised to the most expensive product
    /// so the whole catalog is visible before any control moves.
    pub fn new(catalog: Rc<Catalog>, default_cap: f64) -> Self {
        let price_ceiling = catalog
            .max_price()
            .map_or(default_cap, |max| default_cap.max(max.value().ceil()));
        Self { catalog, state: FilterState::new(price_ceiling), price_ceiling }
    }

    /// Upper end of the price slider.
    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_category(&mut self, category: &str) {
        self.state.set_category(category);
    }

    pub fn set_search(&mut self, search: &str) {
        self.state.set_search(search);
    }

    pub fn set_price_max(&mut self, price_max: f64) {
        self.state.set_price_max(price_max);
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.state.apply(&self.catalog)
    }

    /// Whole replacement list for the grid.
    pub fn render(&self) -> Vec<ProductCard> {
        self.visible().into_iter().map(ProductCard::from).collect()
    }

    /// `"all"` followed by the catalog's categories.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.catalog.categories())
            .map(str::to_string)
            .collect()
    }

    /// Slider readout, e.g. `$250`.
    pub fn price_max_label(&self) -> String {
        format!("${}", self.state.price_max.value())
    }
}
