pub mod cart_store;
pub mod coordinator;
pub mod cosmetics;
pub mod filter_view;
pub mod router;

pub use cart_store::{CartChange, CartStore};
pub use coordinator::StoreSession;
pub use filter_view::{ProductCard, ProductFilterView};
pub use router::{RouteView, ViewRouter};
