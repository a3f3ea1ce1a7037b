use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A catalog item accepted for a piece of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuMatch {
    pub canonical_name: String,
    /// Similarity on a 0-100 scale.
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("No menu item scored at or above the threshold (best score: {best_score:?})")]
    NoMatch { best_score: Option<u8> },
}
