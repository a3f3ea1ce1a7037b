use crate::{
    domain::{
        catalog::services::load_catalog,
        common::{TraybillConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{llm::VisionBackend, menu::MenuFileReader},
};

pub type TraybillService = Service<VisionBackend>;

/// Loads the menu and wires the configured vision backend.
pub fn create_service(config: TraybillConfig) -> Result<TraybillService, CoreError> {
    let reader = MenuFileReader::new(config.menu.path, config.menu.format);
    let catalog = load_catalog(&reader)?;

    let vision_client = VisionBackend::from_config(
        &config.vision,
        config.checkout.response_format.expects_json(),
    )?;

    Ok(Service::new(catalog, vision_client, config.checkout))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::{
        catalog::errors::CatalogError,
        checkout::{ports::CheckoutService, value_objects::CheckoutSettings},
        common::{MenuConfig, VisionConfig, VisionProvider},
    };

    fn config(menu_path: std::path::PathBuf) -> TraybillConfig {
        TraybillConfig {
            menu: MenuConfig {
                path: menu_path,
                format: None,
            },
            vision: VisionConfig {
                provider: VisionProvider::Gemini,
                api_key: "key".to_string(),
                model: "gemini-1.5-flash".to_string(),
                base_url: None,
                timeout_secs: 5,
            },
            checkout: CheckoutSettings::default(),
        }
    }

    #[test]
    fn test_create_service_loads_menu() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"Croissant": "$3.50"}"#).unwrap();

        let service = create_service(config(file.path().to_path_buf())).unwrap();

        assert_eq!(service.menu().len(), 1);
    }

    #[test]
    fn test_create_service_fails_without_menu() {
        let result = create_service(config("/nonexistent/menu.json".into()));

        assert!(matches!(
            result,
            Err(CoreError::Catalog(CatalogError::NotFound(_)))
        ));
    }
}
