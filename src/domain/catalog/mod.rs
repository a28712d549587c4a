//! Catalog aggregate: products supplied wholesale by the host page.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;

/// Builds a minimal product; handy for fixtures and tests.
pub fn product(id: u32, name: &str, category: &str, price: f64) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        price: Price::from(price),
        category: category.to_string(),
        rating: Rating::default(),
        image: String::new(),
        vendor: Vendor::default(),
        badge: None,
        old_price: None,
        discount: None,
        description: None,
        featured: false,
    }
}
