//! Narrowing criteria applied to the catalog before display.
//!
//! Category, search and price are evaluated together by one predicate over the
//! source list; there is no second DOM-side filtering path.

use crate::domain::catalog::{Catalog, Price, Product};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// `"all"` or an exact category name.
    pub category: String,
    /// Case-folded substring; empty matches everything.
    pub search: String,
    /// Inclusive upper bound.
    pub price_max: Price,
}

impl FilterState {
    pub fn new(price_max: f64) -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            price_max: Price::from(price_max),
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.set_search(search);
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_lowercase();
    }

    pub fn set_price_max(&mut self, price_max: f64) {
        self.price_max = Price::from(price_max);
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category = self.category == ALL_CATEGORIES || product.category == self.category;
        let search = self.search.is_empty() || product.name.to_lowercase().contains(&self.search);
        let price = product.price <= self.price_max;
        category && search && price
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.products().iter().filter(|p| self.matches(p)).collect()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product;

    #[test]
    fn price_cap_is_inclusive() {
        let p = product(1, "Lamp", "Home", 15.0);
        let mut state = FilterState::new(15.0);
        assert!(state.matches(&p));
        state.set_price_max(14.99);
        assert!(!state.matches(&p));
    }

    #[test]
    fn search_is_case_folded() {
        let p = product(1, "Premium Product 3", "Home", 5.0);
        assert!(FilterState::default().with_search("PREMIUM").matches(&p));
        assert!(!FilterState::default().with_search("basic").matches(&p));
    }
}
