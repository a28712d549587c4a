use crate::domain::{
    errors::{StoreError, StoreResult},
    routing::{HistoryEntry, HistoryPort},
};
use gloo::utils::format::JsValueSerdeExt;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// `window.history` adapter.
#[derive(Debug, Clone, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    pub fn new() -> Self {
        Self
    }

    /// Route stored in a popstate event's state. Entries we did not push
    /// (or the initial page load) restore `/`.
    pub fn restored_route(state: &JsValue) -> String {
        state
            .into_serde::<HistoryEntry>()
            .map(|entry| entry.route)
            .unwrap_or_else(|_| "/".to_string())
    }
}

impl HistoryPort for BrowserHistory {
    fn push(&mut self, entry: &HistoryEntry) -> StoreResult<()> {
        let history = web_sys::window()
            .ok_or_else(|| StoreError::BrowserApi("Window not available".to_string()))?
            .history()
            .map_err(|_| StoreError::BrowserApi("History not available".to_string()))?;
        let state = JsValue::from_serde(entry)?;
        history
            .push_state_with_url(&state, "", Some(&entry.route))
            .map_err(|e| StoreError::BrowserApi(format!("pushState failed: {:?}", e)))
    }
}

/// Records pushed entries instead of touching the browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Vec<HistoryEntry>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl HistoryPort for MemoryHistory {
    fn push(&mut self, entry: &HistoryEntry) -> StoreResult<()> {
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }
}
