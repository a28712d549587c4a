#![allow(dead_code)]

use std::rc::Rc;
use storefront_wasm::config::StoreConfig;
use storefront_wasm::domain::catalog::{Catalog, Product, Rating, Vendor, product};

/// Twelve products shaped like the page-embedded demo catalog.
pub fn demo_catalog() -> Catalog {
    let categories = ["Electronics", "Fashion", "Home", "Sports"];
    let vendors = ["Alpha Store", "Beta Traders", "Gamma Goods", "Delta Tech"];
    let products = (1..=12u32)
        .map(|i| {
            let mut p: Product = product(
                i,
                &format!("Premium Product {i}"),
                categories[i as usize % 4],
                10.0 + i as f64 * 2.5,
            );
            p.rating = Rating::from(((i % 5) + 1) as f64);
            p.vendor = Vendor { name: vendors[i as usize % 4].to_string(), rating: None };
            p.featured = i <= 4;
            p
        })
        .collect();
    Catalog::new(products)
}

pub fn shared(catalog: Catalog) -> Rc<Catalog> {
    Rc::new(catalog)
}

pub fn config() -> StoreConfig {
    StoreConfig::default()
}
