pub mod dom;
pub mod history;
pub mod page_data;
pub mod services;
pub mod storage;
pub mod timers;

pub use history::{BrowserHistory, MemoryHistory};
pub use storage::{LocalStorageCartRepository, MemoryCartRepository};
pub use timers::Debouncer;
