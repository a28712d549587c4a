//! Data the host page embeds on `window` before the bundle starts.

use crate::config::StoreConfig;
use crate::domain::{
    catalog::{Catalog, Product},
    errors::{StoreError, StoreResult},
    logging::LogComponent,
};
use crate::{log_info, log_warn};
use gloo::utils::format::JsValueSerdeExt;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

pub const PRODUCTS_GLOBAL: &str = "products";
pub const CONFIG_GLOBAL: &str = "storeConfig";

/// `Ok(None)` when the global is absent (undefined or null).
fn read_global<T: DeserializeOwned>(name: &str) -> StoreResult<Option<T>> {
    let window = web_sys::window().ok_or_else(|| StoreError::BrowserApi("Window not available".to_string()))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| StoreError::BrowserApi(format!("reading window.{name}: {:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(Some(value.into_serde()?))
}

/// Parses each record on its own; a malformed record is skipped with a
/// warning and the rest of the catalog survives.
pub fn catalog_from_records(records: Vec<serde_json::Value>) -> Catalog {
    let products = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                log_warn!(LogComponent::Infrastructure("PageData"), "Skipping product #{}: {}", index, e);
                None
            }
        })
        .collect();
    Catalog::new(products)
}

/// The page-supplied catalog. An absent or non-array global yields an empty catalog.
pub fn load_catalog() -> Catalog {
    match read_global::<Vec<serde_json::Value>>(PRODUCTS_GLOBAL) {
        Ok(Some(records)) => {
            let catalog = catalog_from_records(records);
            log_info!(LogComponent::Infrastructure("PageData"), "Loaded {} products", catalog.len());
            catalog
        }
        Ok(None) => {
            log_warn!(LogComponent::Infrastructure("PageData"), "window.{} not set; catalog is empty", PRODUCTS_GLOBAL);
            Catalog::default()
        }
        Err(e) => {
            log_warn!(LogComponent::Infrastructure("PageData"), "Ignoring window.{}: {}", PRODUCTS_GLOBAL, e);
            Catalog::default()
        }
    }
}

/// Defaults overlaid with whatever `window.storeConfig` provides.
pub fn load_config() -> StoreConfig {
    match read_global::<StoreConfig>(CONFIG_GLOBAL) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log_warn!(LogComponent::Infrastructure("PageData"), "Ignoring window.{}: {}", CONFIG_GLOBAL, e);
            StoreConfig::default()
        }
    }
}
