use std::sync::Arc;

use anyhow::Context;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, routing::get};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use traybill_core::{application::create_service, domain::common::TraybillConfig};
use utoipa::OpenApi;

use crate::application::http::checkout::router::checkout_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = TraybillConfig::from(args.as_ref().clone());
    let service = create_service(config).context("failed to start checkout service")?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin {origin:?}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .route(
            &format!("{root_path}/api-docs/openapi.json"),
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(checkout_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use axum::http::StatusCode;
    use axum_test::{
        TestServer,
        multipart::{MultipartForm, Part},
    };
    use clap::Parser;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::application::http::{
        checkout::handlers::get_menu::GetMenuResponse, health::HealthResponse,
    };

    const JPEG_HEADER: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

    fn menu_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"Croissant": "$3.00", "Pain au Chocolat": "$3.50", "Baguette": "$2.75"}}"#
        )
        .unwrap();
        file
    }

    fn test_server(menu: &NamedTempFile, root_path: &str) -> TestServer {
        let args = Args::try_parse_from([
            "traybill",
            "--api-key",
            "test-key",
            "--vision-base-url",
            "http://127.0.0.1:9",
            "--vision-timeout-secs",
            "2",
            "--menu-path",
            menu.path().to_str().unwrap(),
            "--server-root-path",
            root_path,
        ])
        .unwrap();

        let state = state(Arc::new(args)).unwrap();
        TestServer::new(router(state).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let menu = menu_file();
        let server = test_server(&menu, "");

        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<HealthResponse>(),
            HealthResponse {
                status: "ok".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_menu_lists_catalog_in_order() {
        let menu = menu_file();
        let server = test_server(&menu, "");

        let response = server.get("/menu").await;

        response.assert_status_ok();
        let body = response.json::<GetMenuResponse>();
        let names: Vec<&str> = body.data.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Croissant", "Pain au Chocolat", "Baguette"]);
        assert_eq!(body.data[2].price.as_deref(), Some("$2.75"));
    }

    #[tokio::test]
    async fn test_root_path_prefixes_routes() {
        let menu = menu_file();
        let server = test_server(&menu, "/pos");

        server.get("/pos/health").await.assert_status_ok();
        server
            .get("/health")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let docs = server.get("/pos/api-docs/openapi.json").await;
        docs.assert_status_ok();
        let docs = docs.json::<Value>();
        assert!(docs["paths"].get("/pos/checkout").is_some());
        assert!(docs["paths"].get("/pos/menu").is_some());
    }

    #[tokio::test]
    async fn test_checkout_without_image_is_bad_request() {
        let menu = menu_file();
        let server = test_server(&menu, "");

        let form = MultipartForm::new().add_text("note", "no photo");
        let response = server.post("/checkout").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Missing image field");
    }

    #[tokio::test]
    async fn test_checkout_with_non_image_is_bad_request() {
        let menu = menu_file();
        let server = test_server(&menu, "");

        let part = Part::bytes(b"not a picture".to_vec())
            .file_name("tray.txt")
            .mime_type("text/plain");
        let form = MultipartForm::new().add_part("image", part);
        let response = server.post("/checkout").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_checkout_reports_unreachable_model_as_bad_gateway() {
        let menu = menu_file();
        let server = test_server(&menu, "");

        let part = Part::bytes(JPEG_HEADER.to_vec())
            .file_name("tray.jpg")
            .mime_type("image/jpeg");
        let form = MultipartForm::new().add_part("image", part);
        let response = server.post("/checkout").multipart(form).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
