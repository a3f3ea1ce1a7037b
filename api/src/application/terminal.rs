use std::{fmt, path::Path, sync::Arc};

use anyhow::Context;
use tracing::info;
use traybill_core::{
    application::create_service,
    domain::{
        catalog::services::format_price,
        checkout::{CheckoutInput, CheckoutOutcome, CheckoutService, CheckoutStatus, SkipReason},
        common::TraybillConfig,
    },
};

use crate::args::Args;

/// Runs one checkout for an image on disk and prints the bill to stdout.
pub async fn run_checkout(args: Arc<Args>, image: &Path) -> Result<(), anyhow::Error> {
    let config = TraybillConfig::from(args.as_ref().clone());
    let service = create_service(config).context("failed to start checkout service")?;

    let image_data = tokio::fs::read(image)
        .await
        .with_context(|| format!("failed to read image {}", image.display()))?;
    info!(path = %image.display(), bytes = image_data.len(), "checking out tray image");

    let outcome = service.checkout(CheckoutInput { image_data }).await?;
    print!("{}", render_outcome(&outcome));

    Ok(())
}

pub fn render_outcome(outcome: &CheckoutOutcome) -> String {
    OutcomeReport(outcome).to_string()
}

/// Plain-text rendering of a checkout: model output, parsed items and the bill.
struct OutcomeReport<'a>(&'a CheckoutOutcome);

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;

        writeln!(f, "Model output")?;
        writeln!(f, "{}", outcome.raw_output.trim())?;
        writeln!(f)?;

        if outcome.status == CheckoutStatus::NothingDetected {
            return writeln!(f, "No valid items detected. Try another image.");
        }

        writeln!(f, "Parsed items")?;
        for detection in &outcome.detections {
            writeln!(f, "• {} × {}", detection.name, detection.quantity)?;
        }
        writeln!(f)?;

        if !outcome.skipped.is_empty() {
            writeln!(f, "Skipped")?;
            for skipped in &outcome.skipped {
                let reason = match (skipped.reason, skipped.best_score) {
                    (SkipReason::BelowThreshold, Some(score)) => {
                        format!("no close menu match, best score {score}")
                    }
                    (SkipReason::BelowThreshold, None) => "no close menu match".to_string(),
                    (SkipReason::PriceUnavailable, _) => "no price on the menu".to_string(),
                };
                writeln!(f, "• {} × {} ({reason})", skipped.name, skipped.quantity)?;
            }
            writeln!(f)?;
        }

        if outcome.status == CheckoutStatus::NoMenuMatches {
            return writeln!(f, "No matching items found in the menu.");
        }

        writeln!(f, "Bill")?;
        for (name, line) in &outcome.bill.lines {
            writeln!(
                f,
                "{name} × {} = {}",
                line.quantity,
                format_price(line.subtotal)
            )?;
        }
        writeln!(f, "Total: {}", format_price(outcome.bill.total))
    }
}
