//! Small independent UI state machines: no shared state, no persistence.

use crate::domain::catalog::{Catalog, ProductId};

pub const SIDEBAR_OPEN_CLASS: &str = "translate-x-0";
pub const SIDEBAR_CLOSED_CLASS: &str = "-translate-x-full";
pub const HEADER_HIDDEN_CLASS: &str = "-translate-y-full";

/// Off-canvas sidebar: either fully visible or translated out of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn transform_class(&self) -> &'static str {
        if self.open { SIDEBAR_OPEN_CLASS } else { SIDEBAR_CLOSED_CLASS }
    }
}

/// Hides the header while scrolling down. Only the last two samples matter;
/// there is no hysteresis band.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    /// Feed a new offset; returns whether the header should be hidden.
    pub fn observe(&mut self, offset: f64) -> bool {
        let hidden = offset > self.last_offset;
        self.last_offset = offset;
        hidden
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickViewContent {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price_label: String,
    pub category: String,
}

/// The single quick-view overlay: hidden, or showing one product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickView {
    content: Option<QuickViewContent>,
}

impl QuickView {
    /// Returns `false` (and stays as it was) when the product is unknown.
    pub fn open(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        let Some(product) = catalog.find(id) else {
            return false;
        };
        self.content = Some(QuickViewContent {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price_label: product.price.label(),
            category: product.category.clone(),
        });
        true
    }

    pub fn close(&mut self) {
        self.content = None;
    }

    pub fn content(&self) -> Option<&QuickViewContent> {
        self.content.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }
}

/// Expanding circle anchored at the click point inside a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl Ripple {
    /// `x`/`y` are relative to the button; the circle spans the button's larger side.
    pub fn at(id: u64, x: f64, y: f64, width: f64, height: f64) -> Self {
        let size = width.max(height);
        Self { id, left: x - size / 2.0, top: y - size / 2.0, size }
    }

    pub fn style(&self) -> String {
        format!(
            "width:{0}px;height:{0}px;left:{1}px;top:{2}px",
            self.size, self.left, self.top
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Transient notifications, each removed by its own timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast { id: self.next_id, message: message.into() });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Cart badge presentation: hidden at zero.
pub fn badge_class(count: u32, pulsing: bool) -> &'static str {
    match (count, pulsing) {
        (0, _) => "cart-badge scale-0",
        (_, true) => "cart-badge scale-110",
        (_, false) => "cart-badge scale-100",
    }
}
