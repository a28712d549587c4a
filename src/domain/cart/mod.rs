//! Cart aggregate and its persistence port.

pub mod entities;
pub mod repositories;

pub use entities::*;
pub use repositories::*;
