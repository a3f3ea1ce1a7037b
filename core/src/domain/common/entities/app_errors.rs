use thiserror::Error;

use crate::domain::{bill::errors::BillError, catalog::errors::CatalogError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Bill(#[from] BillError),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
