pub mod cart;
pub mod catalog;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod routing;
