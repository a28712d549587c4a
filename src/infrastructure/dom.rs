//! Optional-guarded DOM access. A missing window, document or element turns
//! the calling feature off instead of failing.

use crate::domain::logging::LogComponent;
use crate::log_debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

pub fn set_document_title(title: &str) {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document.set_title(title),
        None => {
            log_debug!(LogComponent::Infrastructure("Dom"), "No document; title '{}' not set", title);
        }
    }
}

/// Vertical scroll offset of the window, `0.0` when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0)
}

/// `true` for same-origin relative paths the router should own. External
/// URLs, protocol-relative `//host` links and fragments keep default behavior.
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

/// Whether an anchor with these attributes should be routed in-page. Links
/// opening another browsing context or marked `download` stay with the browser.
pub fn is_routable_anchor(href: &str, target: Option<&str>, download: bool) -> bool {
    let same_context = target.is_none_or(|t| t.is_empty() || t.eq_ignore_ascii_case("_self"));
    is_internal_href(href) && same_context && !download
}

/// If `ev` was a click on (or inside) a routable `<a href="/...">`, its href.
pub fn internal_link_target(ev: &Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href]").ok()??;
    let href = anchor.get_attribute("href")?;
    let context = anchor.get_attribute("target");
    let routable = is_routable_anchor(&href, context.as_deref(), anchor.has_attribute("download"));
    routable.then_some(href)
}

/// Plain left clicks only; modified clicks open new tabs as usual.
pub fn is_plain_click(ev: &MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Click position relative to `element`'s box, plus the element's size.
pub fn click_within(ev: &MouseEvent, element: &Element) -> (f64, f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    (
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::{is_internal_href, is_routable_anchor};

    #[test]
    fn only_relative_paths_are_internal() {
        assert!(is_internal_href("/products"));
        assert!(is_internal_href("/product/3"));
        assert!(!is_internal_href("https://example.com/"));
        assert!(!is_internal_href("#top"));
        assert!(!is_internal_href("//cdn.example.com/x"));
        assert!(!is_internal_href("products"));
    }

    #[test]
    fn new_tab_and_download_links_stay_with_the_browser() {
        assert!(is_routable_anchor("/cart", None, false));
        assert!(is_routable_anchor("/cart", Some("_self"), false));
        assert!(is_routable_anchor("/cart", Some(""), false));
        assert!(!is_routable_anchor("/cart", Some("_blank"), false));
        assert!(!is_routable_anchor("/cart", Some("preview"), false));
        assert!(!is_routable_anchor("/invoice.pdf", None, true));
    }
}
