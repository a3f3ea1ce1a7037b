use axum::extract::State;
use serde::{Deserialize, Serialize};
use traybill_core::domain::{catalog::MenuEntry, checkout::CheckoutService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub name: String,
    /// Formatted as `$4.50`; absent for menus without prices.
    pub price: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMenuResponse {
    pub data: Vec<MenuItemResponse>,
}

impl From<MenuEntry> for MenuItemResponse {
    fn from(entry: MenuEntry) -> Self {
        let price = entry.display_price();
        Self {
            name: entry.name,
            price,
        }
    }
}

#[utoipa::path(
    get,
    path = "/menu",
    tag = "checkout",
    summary = "List the menu",
    description = "Menu items in catalog order with their display prices",
    responses(
        (status = 200, body = GetMenuResponse)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let data = state
        .service
        .menu()
        .entries()
        .into_iter()
        .map(MenuItemResponse::from)
        .collect();

    Ok(Response::OK(GetMenuResponse { data }))
}
