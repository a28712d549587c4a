/// Everything that can go wrong talks to the browser; none of it is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Storage(String),
    Serialization(String),
    BrowserApi(String),
    ElementNotFound(&'static str),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
            StoreError::BrowserApi(msg) => write!(f, "Browser API Error: {}", msg),
            StoreError::ElementNotFound(id) => write!(f, "Element not found: #{}", id),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
