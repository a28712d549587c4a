mod common;

use storefront_wasm::domain::catalog::{Catalog, Product, ProductId};
use storefront_wasm::infrastructure::page_data::catalog_from_records;
use wasm_bindgen_test::*;

const PAGE_PRODUCTS: &str = r#"[
  {"id": 3, "name": "Premium Product 3", "price": 17.5, "old_price": 19.5, "discount": "10%",
   "image": "https://picsum.photos/seed/product3/400/300.jpg", "rating": 4, "category": "Sports",
   "badge": "", "vendor": {"name": "Delta Tech", "rating": 4.8}, "featured": true,
   "description": "High-quality Sports product with premium features and modern design."},
  {"id": 4, "name": "Premium Product 4", "price": 20.0, "old_price": null, "discount": null,
   "image": "https://picsum.photos/seed/product4/400/300.jpg", "rating": 5, "category": "Electronics",
   "badge": "New", "vendor": {"name": "Alpha Store", "rating": 4.5}, "featured": true}
]"#;

#[wasm_bindgen_test]
fn parses_page_embedded_products() {
    let products: Vec<Product> = serde_json::from_str(PAGE_PRODUCTS).unwrap();
    let catalog = Catalog::new(products);
    let three = catalog.find(ProductId::from(3)).unwrap();
    assert_eq!(three.badge(), None);
    assert_eq!(three.old_price.map(|p| p.label()), Some("$19.50".to_string()));
    assert_eq!(three.vendor.rating, Some(4.8));
    let four = catalog.find(ProductId::from(4)).unwrap();
    assert_eq!(four.badge(), Some("New"));
    assert_eq!(four.old_price, None);
    assert_eq!(four.description, None);
}

#[wasm_bindgen_test]
fn malformed_record_is_skipped_not_the_whole_catalog() {
    let records: Vec<serde_json::Value> = serde_json::from_str(
        r#"[
          {"id": 1, "name": "Lamp", "price": 12.0, "category": "Home"},
          {"id": 2, "name": "Decimal Mug", "price": "2.00", "category": "Home"},
          {"id": 3, "name": "Rug", "price": 40, "category": "Home"}
        ]"#,
    )
    .unwrap();
    let catalog = catalog_from_records(records);
    let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[wasm_bindgen_test]
fn minimal_records_use_defaults() {
    let products: Vec<Product> =
        serde_json::from_str(r#"[{"id": 1, "name": "Plain", "price": 5, "category": "Home"}]"#).unwrap();
    assert!(!products[0].featured);
    assert_eq!(products[0].rating.stars(), [false; 5]);
    assert_eq!(products[0].vendor.name, "");
}

#[wasm_bindgen_test]
fn related_products_share_category_and_exclude_self() {
    let catalog = common::demo_catalog();
    let four = catalog.find(ProductId::from(4)).unwrap();
    let related: Vec<u32> = catalog.related(four, 4).iter().map(|p| p.id.value()).collect();
    assert_eq!(related, vec![8, 12]);
}

#[wasm_bindgen_test]
fn featured_and_max_price() {
    let catalog = common::demo_catalog();
    assert_eq!(catalog.featured().count(), 4);
    assert_eq!(catalog.max_price().map(|p| p.value()), Some(40.0));
    assert_eq!(Catalog::default().max_price(), None);
}
