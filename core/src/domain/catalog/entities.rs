use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::services::format_price;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuEntry {
    pub name: String,
    /// Absent when the menu source carries no price column.
    pub price: Option<Decimal>,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, price: Option<Decimal>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn display_price(&self) -> Option<String> {
        self.price.map(format_price)
    }
}

/// Read-only menu loaded once at startup.
///
/// Entries keep the order of the source document. That order is the
/// iteration order used when breaking ties between equally good matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, Option<Decimal>>,
}

impl Catalog {
    /// Builds a catalog, keeping the first entry when a name repeats.
    pub fn from_entries(entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        let mut map = IndexMap::new();
        for entry in entries {
            if map.contains_key(&entry.name) {
                tracing::warn!("Duplicate menu item '{}' ignored", entry.name);
                continue;
            }
            map.insert(entry.name, entry.price);
        }

        Self { entries: map }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        self.entries
            .iter()
            .map(|(name, price)| MenuEntry::new(name.clone(), *price))
            .collect()
    }

    pub fn price(&self, name: &str) -> Option<Decimal> {
        self.entries.get(name).copied().flatten()
    }

    pub fn has_prices(&self) -> bool {
        self.entries.values().any(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_duplicate_wins() {
        let catalog = Catalog::from_entries([
            MenuEntry::new("Croissant", Some(Decimal::new(350, 2))),
            MenuEntry::new("Baguette", Some(Decimal::new(200, 2))),
            MenuEntry::new("Croissant", Some(Decimal::new(999, 2))),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price("Croissant"), Some(Decimal::new(350, 2)));
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Croissant", "Baguette"]);
    }

    #[test]
    fn test_price_absent_for_unpriced_entry() {
        let catalog = Catalog::from_entries([MenuEntry::new("Scone", None)]);

        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Scone"]);
        assert_eq!(catalog.price("Scone"), None);
        assert_eq!(catalog.price("Muffin"), None);
        assert!(!catalog.has_prices());
    }
}
