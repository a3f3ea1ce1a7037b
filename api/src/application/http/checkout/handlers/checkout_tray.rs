use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use tracing::info;
use traybill_core::domain::checkout::{CheckoutInput, CheckoutOutcome, CheckoutService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    pub data: CheckoutOutcome,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CheckoutForm {
    /// JPEG or PNG photo of the tray.
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/checkout",
    tag = "checkout",
    summary = "Check out a tray",
    description = "Identifies the items on a tray photo, matches them to the menu and prices the bill",
    request_body(content = CheckoutForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = CheckoutResponse),
        (status = 400, description = "Missing or invalid image"),
        (status = 422, description = "A matched item has no price or cannot be billed"),
        (status = 502, description = "Vision model failed"),
    ),
)]
pub async fn checkout_tray(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<CheckoutResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;
            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .checkout(CheckoutInput { image_data })
        .await
        .map_err(ApiError::from)?;

    info!(
        checkout_id = %outcome.id,
        status = ?outcome.status,
        total = %outcome.bill.total,
        "checkout served"
    );

    Ok(Response::OK(CheckoutResponse { data: outcome }))
}
