//! Closed set of in-page routes and the page sections they reveal.

use crate::domain::catalog::ProductId;
use crate::domain::errors::StoreResult;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

pub const PRODUCT_PREFIX: &str = "/product/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    Cart,
    Dashboard,
    /// `None` when the path segment is not a product id at all.
    Product(Option<ProductId>),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path {
            "/" | "/home" => Route::Home,
            "/products" => Route::Products,
            "/cart" => Route::Cart,
            "/dashboard" => Route::Dashboard,
            _ => match path.strip_prefix(PRODUCT_PREFIX) {
                Some(rest) => {
                    let segment = rest.split('/').next().unwrap_or_default();
                    Route::Product(ProductId::parse_segment(segment))
                }
                None => Route::NotFound(path.to_string()),
            },
        }
    }
}

/// Top-level page sections. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Home,
    Products,
    Cart,
    Dashboard,
    ProductDetail,
    NotFound,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Cart => "Cart",
            Section::Dashboard => "Dashboard",
            Section::ProductDetail => "Product",
            Section::NotFound => "Not Found",
        }
    }

    /// Only the active section is shown; every sibling is hidden.
    pub fn is_shown_when(self, active: Section) -> bool {
        self == active
    }
}

/// What gets pushed onto browser history: `{route, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub route: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl HistoryEntry {
    pub fn new(route: impl Into<String>) -> Self {
        Self { route: route.into(), data: serde_json::Value::Object(Default::default()) }
    }
}

/// Browser history as seen by the router.
pub trait HistoryPort {
    fn push(&mut self, entry: &HistoryEntry) -> StoreResult<()>;
}
