use rust_decimal::Decimal;

use crate::domain::{
    bill::{
        entities::{Bill, MatchedLineItem},
        errors::BillError,
    },
    catalog::entities::Catalog,
};

/// Prices matched items against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct BillBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> BillBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn line_item(&self, name: &str, quantity: u32) -> Result<MatchedLineItem, BillError> {
        let price = self
            .catalog
            .price(name)
            .ok_or_else(|| BillError::PriceUnavailable(name.to_string()))?;

        Ok(MatchedLineItem {
            canonical_name: name.to_string(),
            quantity,
            subtotal: price
                .checked_mul(Decimal::from(quantity))
                .ok_or_else(|| BillError::QuantityOverflow(name.to_string()))?,
        })
    }

    /// Accumulates `(canonical name, quantity)` pairs into a bill.
    ///
    /// Fails on the first name without a price or whose quantity overflows;
    /// no partial bill is returned.
    pub fn build<'n>(
        &self,
        matches: impl IntoIterator<Item = (&'n str, u32)>,
    ) -> Result<Bill, BillError> {
        let mut bill = Bill::default();
        for (name, quantity) in matches {
            bill.add(self.line_item(name, quantity)?)?;
        }

        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entities::MenuEntry;

    fn catalog() -> Catalog {
        Catalog::from_entries([
            MenuEntry::new("Croissant", Some(Decimal::new(350, 2))),
            MenuEntry::new("Baguette", Some(Decimal::new(200, 2))),
            MenuEntry::new("Cinnamon Roll", Some(Decimal::new(425, 2))),
            MenuEntry::new("Day-old Loaf", None),
        ])
    }

    #[test]
    fn test_build_prices_each_line() {
        let catalog = catalog();
        let bill = BillBuilder::new(&catalog)
            .build([("Croissant", 2), ("Baguette", 1)])
            .unwrap();

        assert_eq!(bill.line("Croissant").unwrap().quantity, 2);
        assert_eq!(bill.line("Croissant").unwrap().subtotal, Decimal::new(700, 2));
        assert_eq!(bill.line("Baguette").unwrap().subtotal, Decimal::new(200, 2));
        assert_eq!(bill.total, Decimal::new(900, 2));
        assert_eq!(format!("{:.2}", bill.total), "9.00");
    }

    #[test]
    fn test_repeated_names_accumulate() {
        let catalog = catalog();
        let bill = BillBuilder::new(&catalog)
            .build([("Cinnamon Roll", 1), ("Croissant", 1), ("Cinnamon Roll", 2)])
            .unwrap();

        let roll = bill.line("Cinnamon Roll").unwrap();
        assert_eq!(roll.quantity, 3);
        assert_eq!(roll.subtotal, Decimal::new(1275, 2));
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.item_count(), 4);
    }

    #[test]
    fn test_total_matches_line_subtotals() {
        let catalog = catalog();
        let inputs: [&[(&str, u32)]; 3] = [
            &[("Croissant", 3)],
            &[("Baguette", 7), ("Croissant", 1), ("Baguette", 2)],
            &[("Cinnamon Roll", 11), ("Baguette", 5), ("Croissant", 9)],
        ];

        for input in inputs {
            let bill = BillBuilder::new(&catalog).build(input.iter().copied()).unwrap();
            assert_eq!(bill.total, bill.recomputed_total());
            for (name, line) in &bill.lines {
                let price = catalog.price(name).unwrap();
                assert_eq!(line.subtotal, price * Decimal::from(line.quantity));
            }
        }
    }

    #[test]
    fn test_build_is_repeatable() {
        let catalog = catalog();
        let builder = BillBuilder::new(&catalog);
        let input = [("Croissant", 2), ("Cinnamon Roll", 1)];

        assert_eq!(builder.build(input).unwrap(), builder.build(input).unwrap());
    }

    #[test]
    fn test_empty_input_gives_empty_bill() {
        let catalog = catalog();
        let bill = BillBuilder::new(&catalog)
            .build(Vec::<(&str, u32)>::new())
            .unwrap();

        assert!(bill.is_empty());
        assert_eq!(bill.total, Decimal::ZERO);
        assert_eq!(format!("{:.2}", bill.total), "0.00");
    }

    #[test]
    fn test_huge_repeated_quantity_is_an_error() {
        let catalog = catalog();

        assert_eq!(
            BillBuilder::new(&catalog).build([("Croissant", u32::MAX), ("Croissant", 2)]),
            Err(BillError::QuantityOverflow("Croissant".to_string()))
        );
    }

    #[test]
    fn test_missing_price_fails_build() {
        let catalog = catalog();

        assert_eq!(
            BillBuilder::new(&catalog).build([("Croissant", 1), ("Day-old Loaf", 1)]),
            Err(BillError::PriceUnavailable("Day-old Loaf".to_string()))
        );
    }
}
