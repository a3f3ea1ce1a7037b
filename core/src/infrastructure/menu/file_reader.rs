use std::{fs, io::ErrorKind, path::PathBuf};

use crate::{
    domain::catalog::{
        errors::CatalogError,
        ports::MenuReader,
        value_objects::{MenuFormat, MenuSource},
    },
    infrastructure::menu::mappers::{csv_to_menu_source, json_to_menu_source},
};

/// Reads the menu from a JSON or CSV file on disk.
#[derive(Debug, Clone)]
pub struct MenuFileReader {
    path: PathBuf,
    format: Option<MenuFormat>,
}

impl MenuFileReader {
    pub fn new(path: impl Into<PathBuf>, format: Option<MenuFormat>) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    fn resolve_format(&self) -> Result<MenuFormat, CatalogError> {
        self.format
            .or_else(|| MenuFormat::from_path(&self.path))
            .ok_or_else(|| CatalogError::UnsupportedFormat(self.path.display().to_string()))
    }
}

impl MenuReader for MenuFileReader {
    fn read_menu(&self) -> Result<MenuSource, CatalogError> {
        let format = self.resolve_format()?;
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(self.path.display().to_string()),
            _ => CatalogError::Unreadable(format!("{}: {}", self.path.display(), e)),
        })?;

        tracing::debug!("Reading {} menu from {}", format, self.path.display());

        match format {
            MenuFormat::Json => json_to_menu_source(&content),
            MenuFormat::Csv => csv_to_menu_source(&content),
        }
    }
}
