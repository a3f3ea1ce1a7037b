use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Menu file not found: {0}")]
    NotFound(String),

    #[error("Menu file could not be read: {0}")]
    Unreadable(String),

    #[error("Malformed menu source: {0}")]
    Malformed(String),

    #[error("Unsupported menu format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed price {price:?} for menu item {name:?}")]
    MalformedPrice { name: String, price: String },

    #[error("Menu contains no items")]
    Empty,
}
