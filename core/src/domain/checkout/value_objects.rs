use std::{fmt, str::FromStr};

use crate::domain::{
    detection::value_objects::ResponseFormat, matching::services::DEFAULT_THRESHOLD,
};

#[derive(Debug, Clone)]
pub struct CheckoutInput {
    pub image_data: Vec<u8>,
}

/// What to do with a matched item whose menu entry has no price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPricePolicy {
    /// Fail the whole checkout.
    #[default]
    Abort,
    /// Leave the item off the bill and report it as skipped.
    Skip,
}

impl FromStr for MissingPricePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(MissingPricePolicy::Abort),
            "skip" => Ok(MissingPricePolicy::Skip),
            other => Err(format!(
                "unknown missing price policy '{other}', expected abort or skip"
            )),
        }
    }
}

impl fmt::Display for MissingPricePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPricePolicy::Abort => f.write_str("abort"),
            MissingPricePolicy::Skip => f.write_str("skip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Minimum similarity (0-100) for a detection to count as a menu item.
    pub threshold: u8,
    pub response_format: ResponseFormat,
    pub missing_price: MissingPricePolicy,
    /// Number of menu items listed in the prompt, all when `None`.
    pub prompt_menu_limit: Option<usize>,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            response_format: ResponseFormat::LinePattern,
            missing_price: MissingPricePolicy::default(),
            prompt_menu_limit: None,
        }
    }
}
