use std::sync::Arc;

use crate::domain::{
    catalog::entities::Catalog,
    checkout::{ports::VisionClient, value_objects::CheckoutSettings},
};

/// Application service bound to one catalog and one vision backend.
///
/// Cloning is cheap; the catalog and the client are shared.
#[derive(Debug)]
pub struct Service<V>
where
    V: VisionClient,
{
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) vision_client: Arc<V>,
    pub(crate) settings: CheckoutSettings,
}

impl<V> Service<V>
where
    V: VisionClient,
{
    pub fn new(catalog: Catalog, vision_client: V, settings: CheckoutSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            vision_client: Arc::new(vision_client),
            settings,
        }
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }
}

impl<V> Clone for Service<V>
where
    V: VisionClient,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            vision_client: Arc::clone(&self.vision_client),
            settings: self.settings.clone(),
        }
    }
}
