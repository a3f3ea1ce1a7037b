use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::bill::errors::BillError;

/// One priced item of a checkout, `subtotal == price * quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchedLineItem {
    pub canonical_name: String,
    pub quantity: u32,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BillLine {
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// Quantities and subtotals per canonical name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bill {
    pub lines: IndexMap<String, BillLine>,
    pub total: Decimal,
}

impl Bill {
    /// Adds a priced item, summing with any earlier line of the same name.
    ///
    /// The bill is left untouched when a sum would overflow.
    pub fn add(&mut self, item: MatchedLineItem) -> Result<(), BillError> {
        let overflow = || BillError::QuantityOverflow(item.canonical_name.clone());

        let (quantity, subtotal) = match self.lines.get(&item.canonical_name) {
            Some(line) => (
                line.quantity.checked_add(item.quantity).ok_or_else(overflow)?,
                line.subtotal.checked_add(item.subtotal).ok_or_else(overflow)?,
            ),
            None => (item.quantity, item.subtotal),
        };
        let total = self.total.checked_add(item.subtotal).ok_or_else(overflow)?;

        self.lines
            .insert(item.canonical_name, BillLine { quantity, subtotal });
        self.total = total;

        Ok(())
    }

    pub fn line(&self, name: &str) -> Option<&BillLine> {
        self.lines.get(name)
    }

    pub fn recomputed_total(&self) -> Decimal {
        self.lines.values().map(|line| line.subtotal).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
