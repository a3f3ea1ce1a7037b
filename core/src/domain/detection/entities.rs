use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item name and count as emitted by the vision model, before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RawDetection {
    pub name: String,
    pub quantity: u32,
}

impl RawDetection {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}
