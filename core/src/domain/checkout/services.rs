use crate::domain::{
    catalog::entities::Catalog,
    checkout::{
        entities::CheckoutOutcome,
        helpers::price_detections,
        policies::TrayImage,
        ports::{CheckoutService, VisionClient},
        value_objects::CheckoutInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    detection::prompt::build_prompt,
};

impl<V> CheckoutService for Service<V>
where
    V: VisionClient,
{
    async fn checkout(&self, input: CheckoutInput) -> Result<CheckoutOutcome, CoreError> {
        // 1. Validate image
        let image = TrayImage::from_bytes(input.image_data)?;
        tracing::debug!(
            format = ?image.format(),
            bytes = image.data().len(),
            "Tray image accepted"
        );

        // 2. Build prompt from the menu
        let format = self.settings.response_format;
        let prompt = build_prompt(format, &self.catalog, self.settings.prompt_menu_limit);

        // 3. Call the vision model
        let raw_output = self.vision_client.describe_image(prompt, image).await?;
        let raw_output = raw_output.trim().to_string();

        // 4. Parse detections
        let detections = format.parse(&raw_output);
        if detections.is_empty() {
            tracing::warn!(%format, "No items detected in model output");
            return Ok(CheckoutOutcome::nothing_detected(raw_output));
        }

        // 5. Match and price
        let priced = price_detections(&self.catalog, &detections, &self.settings)?;
        let outcome = CheckoutOutcome::new(
            raw_output,
            detections,
            priced.matches,
            priced.skipped,
            priced.bill,
        );

        tracing::info!(
            checkout_id = %outcome.id,
            status = ?outcome.status,
            detected = outcome.detections.len(),
            matched = outcome.matches.len(),
            skipped = outcome.skipped.len(),
            total = %outcome.bill.total,
            "Checkout completed"
        );

        Ok(outcome)
    }

    fn menu(&self) -> &Catalog {
        &self.catalog
    }
}
