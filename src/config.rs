use crate::domain::logging::LogLevel;
use serde::Deserialize;

/// Tunables for the storefront. The host page may override any subset through
/// a `window.storeConfig` object; see [`crate::infrastructure::page_data`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub brand: String,
    pub cart_storage_key: String,
    pub default_price_max: f64,
    pub skeleton_delay_ms: u32,
    pub filter_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub ripple_duration_ms: u32,
    pub badge_pulse_ms: u32,
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: "JanCommerce".to_string(),
            cart_storage_key: "jancommerce_cart".to_string(),
            default_price_max: 1000.0,
            skeleton_delay_ms: 1000,
            filter_debounce_ms: 300,
            toast_duration_ms: 3000,
            ripple_duration_ms: 600,
            badge_pulse_ms: 200,
            log_level: "debug".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {}", page, self.brand)
    }

    /// Unknown level strings fall back to `Debug`.
    pub fn min_log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"brand":"Acme","filter_debounce_ms":50}"#).unwrap();
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.filter_debounce_ms, 50);
        assert_eq!(config.cart_storage_key, "jancommerce_cart");
        assert_eq!(config.page_title("Cart"), "Cart - Acme");
    }

    #[test]
    fn bad_log_level_falls_back() {
        let config = StoreConfig { log_level: "shout".into(), ..Default::default() };
        assert_eq!(config.min_log_level(), LogLevel::Debug);
    }
}
