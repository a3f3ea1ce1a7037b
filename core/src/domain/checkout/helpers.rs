use crate::domain::{
    bill::{entities::Bill, services::BillBuilder},
    catalog::entities::Catalog,
    checkout::{
        entities::{MatchedDetection, SkipReason, SkippedDetection},
        value_objects::{CheckoutSettings, MissingPricePolicy},
    },
    common::entities::app_errors::CoreError,
    detection::entities::RawDetection,
    matching::{entities::MatchError, services::MenuMatcher},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedDetections {
    pub matches: Vec<MatchedDetection>,
    pub skipped: Vec<SkippedDetection>,
    pub bill: Bill,
}

/// Matches detections against the catalog and prices the ones that match.
///
/// Low-confidence detections are skipped. Matches without a price are either
/// skipped or fail the call, depending on `settings.missing_price`.
pub fn price_detections(
    catalog: &Catalog,
    detections: &[RawDetection],
    settings: &CheckoutSettings,
) -> Result<PricedDetections, CoreError> {
    let matcher = MenuMatcher::new(
        settings.threshold,
        settings.response_format.match_strategy(),
    );
    let mut matches = Vec::new();
    let mut skipped = Vec::new();

    for detection in detections {
        match matcher.match_item(&detection.name, catalog) {
            Ok(found) => {
                if settings.missing_price == MissingPricePolicy::Skip
                    && catalog.price(&found.canonical_name).is_none()
                {
                    tracing::warn!(
                        "Skipping '{}': no price for '{}'",
                        detection.name,
                        found.canonical_name
                    );
                    skipped.push(SkippedDetection {
                        name: detection.name.clone(),
                        quantity: detection.quantity,
                        reason: SkipReason::PriceUnavailable,
                        best_score: None,
                    });
                    continue;
                }

                matches.push(MatchedDetection {
                    detected_name: detection.name.clone(),
                    canonical_name: found.canonical_name,
                    quantity: detection.quantity,
                    score: found.score,
                });
            }
            Err(MatchError::NoMatch { best_score }) => {
                tracing::info!(
                    "Skipping '{}': best score {:?} below threshold {}",
                    detection.name,
                    best_score,
                    matcher.threshold()
                );
                skipped.push(SkippedDetection {
                    name: detection.name.clone(),
                    quantity: detection.quantity,
                    reason: SkipReason::BelowThreshold,
                    best_score,
                });
            }
        }
    }

    let bill = BillBuilder::new(catalog).build(
        matches
            .iter()
            .map(|m| (m.canonical_name.as_str(), m.quantity)),
    )?;

    Ok(PricedDetections {
        matches,
        skipped,
        bill,
    })
}
