use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::matching::scoring::{partial_ratio, weighted_ratio};

/// How a piece of free text is compared with a catalog name.
///
/// Both inputs are expected to be normalized already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The free text names one item, possibly misspelled or pluralized.
    Extract,
    /// The free text is a whole caption that may mention the item anywhere.
    CaptionScan,
}

impl MatchStrategy {
    pub fn score(self, free_text: &str, candidate: &str) -> u8 {
        match self {
            MatchStrategy::Extract => weighted_ratio(free_text, candidate),
            MatchStrategy::CaptionScan => {
                partial_ratio(candidate, free_text).max(partial_ratio(free_text, candidate))
            }
        }
    }
}
