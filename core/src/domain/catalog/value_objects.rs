use std::{fmt, path::Path, str::FromStr};

use indexmap::IndexMap;

/// Menu document as read from disk, before any price is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// Flat `name -> "$4.50"` mapping, in document order.
    PriceMap(IndexMap<String, String>),
    /// Rows of a table with a `Name` column and an optional `Price` column.
    Table(Vec<MenuRow>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRow {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl MenuRow {
    pub fn new(name: Option<&str>, price: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            price: price.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Csv,
}

impl MenuFormat {
    /// Guesses the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }
}

impl FromStr for MenuFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(MenuFormat::Json),
            "csv" => Ok(MenuFormat::Csv),
            other => Err(format!("unknown menu format '{other}', expected json or csv")),
        }
    }
}

impl fmt::Display for MenuFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuFormat::Json => f.write_str("json"),
            MenuFormat::Csv => f.write_str("csv"),
        }
    }
}
