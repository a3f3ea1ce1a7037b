use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use traybill_core::domain::checkout::policies::MAX_IMAGE_SIZE;

use super::handlers::{checkout_tray::checkout_tray, get_menu::get_menu};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart framing around a maximum size image.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn checkout_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/checkout", state.args.server.root_path),
            post(checkout_tray).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/menu", state.args.server.root_path),
            get(get_menu),
        )
}
