use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::catalog::{
    errors::CatalogError,
    value_objects::{MenuRow, MenuSource},
};

/// Maps a flat `{"Croissant": "$3.50"}` document.
///
/// Bare numbers are accepted as prices as well.
pub fn json_to_menu_source(content: &str) -> Result<MenuSource, CatalogError> {
    let document: IndexMap<String, Value> = serde_json::from_str(content).map_err(|e| {
        CatalogError::Malformed(format!("menu JSON must be an object of name to price: {e}"))
    })?;

    let mut prices = IndexMap::with_capacity(document.len());
    for (name, value) in document {
        let price = match value {
            Value::String(price) => price,
            Value::Number(number) => number.to_string(),
            other => {
                return Err(CatalogError::MalformedPrice {
                    name,
                    price: other.to_string(),
                });
            }
        };
        prices.insert(name, price);
    }

    Ok(MenuSource::PriceMap(prices))
}

/// Maps a table with a `Name` column and an optional `Price` column.
///
/// Header names are matched case-insensitively; other columns are ignored.
pub fn csv_to_menu_source(content: &str) -> Result<MenuSource, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Malformed(format!("unreadable menu header: {e}")))?
        .clone();

    let column = |wanted: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(wanted))
    };
    let name_column = column("name")
        .ok_or_else(|| CatalogError::Malformed("menu table has no Name column".to_string()))?;
    let price_column = column("price");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| CatalogError::Malformed(format!("unreadable menu row: {e}")))?;
        rows.push(MenuRow::new(
            record.get(name_column),
            price_column.and_then(|index| record.get(index)),
        ));
    }

    Ok(MenuSource::Table(rows))
}
