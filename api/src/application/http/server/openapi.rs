use utoipa::OpenApi;

use crate::application::http::{
    checkout::handlers::{
        checkout_tray::__path_checkout_tray, get_menu::__path_get_menu,
    },
    health::__path_health,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Traybill API",
        description = "Prices a bakery tray from a photo"
    ),
    paths(checkout_tray, get_menu, health),
    tags(
        (name = "checkout", description = "Tray checkout and menu"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
