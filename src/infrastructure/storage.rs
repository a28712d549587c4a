use crate::domain::{
    cart::{CartEntry, CartRepository},
    errors::{StoreError, StoreResult},
};
use gloo::storage::{LocalStorage, Storage, errors::StorageError};
use std::cell::RefCell;
use std::rc::Rc;

/// Cart mirror in `window.localStorage` under a single key.
#[derive(Debug, Clone)]
pub struct LocalStorageCartRepository {
    key: String,
}

impl LocalStorageCartRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl CartRepository for LocalStorageCartRepository {
    fn load(&self) -> StoreResult<Option<Vec<CartEntry>>> {
        match LocalStorage::get::<Vec<CartEntry>>(&self.key) {
            Ok(entries) => Ok(Some(entries)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(StoreError::Serialization(e.to_string())),
            Err(StorageError::JsError(e)) => Err(StoreError::Storage(e.to_string())),
        }
    }

    fn save(&mut self, entries: &[CartEntry]) -> StoreResult<()> {
        LocalStorage::set(&self.key, entries).map_err(|e| StoreError::Storage(e.to_string()))
    }
}

/// In-memory stand-in holding the raw serialized blob. Clones share the slot,
/// so a second store built from a clone sees what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartRepository {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartRepository for MemoryCartRepository {
    fn load(&self) -> StoreResult<Option<Vec<CartEntry>>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, entries: &[CartEntry]) -> StoreResult<()> {
        let raw = serde_json::to_string(entries)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}
