use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::catalog::{
    entities::{Catalog, MenuEntry},
    errors::CatalogError,
    ports::MenuReader,
    value_objects::MenuSource,
};

/// Parses a display price such as `"$4.50"`.
///
/// Leading currency symbols and whitespace are stripped; the remainder must be
/// a plain, non-negative decimal number. A sign is never stripped.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let amount = raw
        .trim()
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')));

    if amount.is_empty() {
        return None;
    }

    Decimal::from_str(amount)
        .ok()
        .filter(|price| !price.is_sign_negative() || price.is_zero())
}

/// Formats an amount the way prices are shown to customers.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Turns a raw menu document into a catalog.
///
/// Entries with a blank name are dropped. A price that is present but cannot
/// be parsed fails the whole load.
pub fn build_catalog(source: MenuSource) -> Result<Catalog, CatalogError> {
    let mut entries = Vec::new();

    match source {
        MenuSource::PriceMap(prices) => {
            for (name, price) in prices {
                let name = name.trim();
                if name.is_empty() {
                    tracing::debug!("Skipping menu entry with an empty name");
                    continue;
                }

                let parsed = parse_price(&price).ok_or_else(|| CatalogError::MalformedPrice {
                    name: name.to_string(),
                    price: price.clone(),
                })?;
                entries.push(MenuEntry::new(name, Some(parsed)));
            }
        }
        MenuSource::Table(rows) => {
            for row in rows {
                let Some(name) = row.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
                else {
                    tracing::debug!("Skipping menu row without a name");
                    continue;
                };

                let price = match row.price.as_deref().map(str::trim) {
                    None | Some("") => None,
                    Some(raw) => Some(parse_price(raw).ok_or_else(|| {
                        CatalogError::MalformedPrice {
                            name: name.to_string(),
                            price: raw.to_string(),
                        }
                    })?),
                };
                entries.push(MenuEntry::new(name, price));
            }
        }
    }

    let catalog = Catalog::from_entries(entries);
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(catalog)
}

/// Reads the menu through `reader` and builds the catalog.
pub fn load_catalog<R: MenuReader>(reader: &R) -> Result<Catalog, CatalogError> {
    let source = reader.read_menu()?;
    let catalog = build_catalog(source)?;

    tracing::info!(
        items = catalog.len(),
        priced = catalog.has_prices(),
        "Menu catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::domain::catalog::{ports::MockMenuReader, value_objects::MenuRow};

    fn price_map(pairs: &[(&str, &str)]) -> MenuSource {
        MenuSource::PriceMap(
            pairs
                .iter()
                .map(|(name, price)| (name.to_string(), price.to_string()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn test_parse_price_strips_currency() {
        assert_eq!(parse_price("$4.50"), Some(Decimal::new(450, 2)));
        assert_eq!(parse_price(" € 12 "), Some(Decimal::new(12, 0)));
        assert_eq!(parse_price("3.25"), Some(Decimal::new(325, 2)));
    }

    #[test]
    fn test_parse_price_rejects_non_numeric() {
        assert_eq!(parse_price("$"), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("$4.50 each"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        assert_eq!(parse_price("$-4.50"), None);
        assert_eq!(parse_price("-2"), None);
        assert_eq!(parse_price("- $3.00"), None);
        assert_eq!(parse_price("$0.00"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_price_round_trip_to_two_decimals() {
        for raw in ["$4.50", "$0.99", "$12.00", "£7.05", "$100.10"] {
            let parsed = parse_price(raw).unwrap();
            let digits = raw.trim_start_matches(|c: char| !c.is_ascii_digit());
            assert_eq!(format_price(parsed), format!("${digits}"));
            assert_eq!(parse_price(&format_price(parsed)), Some(parsed));
        }
    }

    #[test]
    fn test_build_from_price_map_keeps_order() {
        let catalog =
            build_catalog(price_map(&[("Croissant", "$3.50"), ("Baguette", "$2.00")])).unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Croissant", "Baguette"]);
        assert_eq!(catalog.price("Baguette"), Some(Decimal::new(200, 2)));
    }

    #[test]
    fn test_build_fails_on_malformed_price() {
        let result = build_catalog(price_map(&[("Croissant", "$3.50"), ("Tart", "ask")]));

        assert_eq!(
            result,
            Err(CatalogError::MalformedPrice {
                name: "Tart".to_string(),
                price: "ask".to_string(),
            })
        );
    }

    #[test]
    fn test_build_fails_on_negative_price() {
        let result = build_catalog(price_map(&[("Refund", "-2.5")]));

        assert_eq!(
            result,
            Err(CatalogError::MalformedPrice {
                name: "Refund".to_string(),
                price: "-2.5".to_string(),
            })
        );
    }

    #[test]
    fn test_build_drops_rows_without_name() {
        let catalog = build_catalog(MenuSource::Table(vec![
            MenuRow::new(Some("Croissant"), None),
            MenuRow::new(Some("   "), None),
            MenuRow::new(None, Some("$1.00")),
            MenuRow::new(Some("Danish"), Some("$2.75")),
        ]))
        .unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Croissant", "Danish"]);
        assert_eq!(catalog.price("Croissant"), None);
        assert_eq!(catalog.price("Danish"), Some(Decimal::new(275, 2)));
    }

    #[test]
    fn test_build_rejects_empty_menu() {
        let result = build_catalog(MenuSource::Table(vec![MenuRow::new(Some(""), None)]));

        assert_eq!(result, Err(CatalogError::Empty));
    }

    #[test]
    fn test_load_catalog_reads_through_port() {
        let mut reader = MockMenuReader::new();
        reader
            .expect_read_menu()
            .times(1)
            .returning(|| Ok(price_map(&[("Croissant", "$3.50")])));

        let catalog = load_catalog(&reader).unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_propagates_reader_error() {
        let mut reader = MockMenuReader::new();
        reader
            .expect_read_menu()
            .returning(|| Err(CatalogError::NotFound("menu.json".to_string())));

        assert_eq!(
            load_catalog(&reader),
            Err(CatalogError::NotFound("menu.json".to_string()))
        );
    }
}
