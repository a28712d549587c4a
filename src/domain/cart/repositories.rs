use super::CartEntry;
use crate::domain::errors::StoreResult;

/// Durable mirror of the cart. One key, one serialized array.
pub trait CartRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> StoreResult<Option<Vec<CartEntry>>>;

    /// Replace the stored cart with `entries`.
    fn save(&mut self, entries: &[CartEntry]) -> StoreResult<()>;
}
