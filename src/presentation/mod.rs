//! Leptos components. They read view-model data from [`crate::app::StoreContext`]
//! and call back into it; none of them own storefront state.

pub mod filters;
pub mod header;
pub mod product_grid;
pub mod quick_view;
pub mod sections;
pub mod sidebar;
pub mod toast;
