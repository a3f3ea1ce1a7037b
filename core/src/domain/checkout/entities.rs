use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    bill::entities::Bill, common::generate_timestamp, detection::entities::RawDetection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    Billed,
    /// The model output contained no recognizable items.
    NothingDetected,
    /// Items were detected but none made it onto the bill.
    NoMenuMatches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    BelowThreshold,
    PriceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchedDetection {
    pub detected_name: String,
    pub canonical_name: String,
    pub quantity: u32,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkippedDetection {
    pub name: String,
    pub quantity: u32,
    pub reason: SkipReason,
    /// Best similarity found, when the item was skipped for a low score.
    pub best_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutOutcome {
    pub id: Uuid,
    pub status: CheckoutStatus,
    /// Model output as received, kept for diagnostics.
    pub raw_output: String,
    pub detections: Vec<RawDetection>,
    pub matches: Vec<MatchedDetection>,
    pub skipped: Vec<SkippedDetection>,
    pub bill: Bill,
    pub created_at: DateTime<Utc>,
}

impl CheckoutOutcome {
    /// Outcome for model output in which nothing could be parsed.
    pub fn nothing_detected(raw_output: String) -> Self {
        Self::new(
            raw_output,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Bill::default(),
        )
    }

    pub fn new(
        raw_output: String,
        detections: Vec<RawDetection>,
        matches: Vec<MatchedDetection>,
        skipped: Vec<SkippedDetection>,
        bill: Bill,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();
        let status = if detections.is_empty() {
            CheckoutStatus::NothingDetected
        } else if bill.is_empty() {
            CheckoutStatus::NoMenuMatches
        } else {
            CheckoutStatus::Billed
        };

        Self {
            id: Uuid::new_v7(timestamp),
            status,
            raw_output,
            detections,
            matches,
            skipped,
            bill,
            created_at: now,
        }
    }
}
