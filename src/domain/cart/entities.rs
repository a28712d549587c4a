use crate::domain::catalog::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// A product snapshot plus how many of it the shopper wants.
///
/// Serialized flat (`{...product, quantity}`) so the stored blob stays a plain
/// array of product records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> Price {
        Price::from(self.product.price.value() * self.quantity as f64)
    }
}

/// Aggregate - at most one entry per product id, every quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored entries, restoring the invariants: zero
    /// quantities are dropped and duplicate ids are merged.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Self::new();
        for entry in entries.into_iter().filter(|e| e.quantity > 0) {
            match cart.entries.iter_mut().find(|e| e.id() == entry.id()) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(entry.quantity),
                None => cart.entries.push(entry),
            }
        }
        cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Increment the entry for `product`, creating it with quantity 1.
    /// Returns the new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        match self.entries.iter_mut().find(|e| e.id() == product.id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry { product: product.clone(), quantity: 1 });
                1
            }
        }
    }

    /// Delete the whole entry regardless of quantity. Returns whether one existed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    /// Badge count: sum of quantities, not number of lines.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn total_price(&self) -> Price {
        Price::from(self.entries.iter().map(|e| e.line_total().value()).sum::<f64>())
    }
}
