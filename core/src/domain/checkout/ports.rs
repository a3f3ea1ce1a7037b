use std::future::Future;

use crate::domain::{
    catalog::entities::Catalog,
    checkout::{entities::CheckoutOutcome, policies::TrayImage, value_objects::CheckoutInput},
    common::entities::app_errors::CoreError,
};

/// Client for the hosted vision/language model.
///
/// One call per checkout, no retry. Any transport failure, refusal or empty
/// answer is reported as [`CoreError::ExternalServiceError`].
pub trait VisionClient: Send + Sync {
    fn describe_image(
        &self,
        prompt: Option<String>,
        image: TrayImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the tray checkout pipeline
pub trait CheckoutService: Send + Sync {
    fn checkout(
        &self,
        input: CheckoutInput,
    ) -> impl Future<Output = Result<CheckoutOutcome, CoreError>> + Send;

    fn menu(&self) -> &Catalog;
}
