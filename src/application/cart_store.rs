use crate::domain::{
    cart::{Cart, CartRepository},
    catalog::{Catalog, ProductId},
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added { id: ProductId, quantity: u32 },
    Removed { id: ProductId },
}

/// Sole owner of the cart and its durable mirror. Every mutation is a
/// synchronous read-modify-write followed by a full save.
pub struct CartStore<R: CartRepository> {
    repository: R,
    cart: Cart,
}

impl<R: CartRepository> CartStore<R> {
    /// Restore from the repository. Missing or corrupt data starts empty.
    pub fn load(repository: R) -> Self {
        let cart = match repository.load() {
            Ok(Some(entries)) => Cart::from_entries(entries),
            Ok(None) => Cart::new(),
            Err(e) => {
                log_warn!(LogComponent::Application("CartStore"), "Discarding stored cart: {}", e);
                Cart::new()
            }
        };
        log_debug!(LogComponent::Application("CartStore"), "Restored {} items", cart.total_quantity());
        Self { repository, cart }
    }

    /// No-op (returns `None`) when `id` is not in the catalog.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> Option<CartChange> {
        let product = catalog.find(id)?;
        let quantity = self.cart.add(product);
        self.persist();
        Some(CartChange::Added { id, quantity })
    }

    /// Drops the whole entry, whatever its quantity.
    pub fn remove(&mut self, id: ProductId) -> Option<CartChange> {
        let removed = self.cart.remove(id);
        self.persist();
        removed.then_some(CartChange::Removed { id })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn badge_count(&self) -> u32 {
        self.cart.total_quantity()
    }

    fn persist(&mut self) {
        if let Err(e) = self.repository.save(self.cart.entries()) {
            log_error!(LogComponent::Application("CartStore"), "Cart not persisted: {}", e);
        }
    }
}
