use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    #[error("No price available for menu item '{0}'")]
    PriceUnavailable(String),

    #[error("Quantity of menu item '{0}' is too large")]
    QuantityOverflow(String),
}
