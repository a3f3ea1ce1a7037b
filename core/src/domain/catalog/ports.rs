use crate::domain::catalog::{errors::CatalogError, value_objects::MenuSource};

/// Source of the raw menu document.
#[cfg_attr(test, mockall::automock)]
pub trait MenuReader: Send + Sync {
    fn read_menu(&self) -> Result<MenuSource, CatalogError>;
}
