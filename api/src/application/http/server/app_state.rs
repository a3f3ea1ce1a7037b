use std::sync::Arc;

use traybill_core::application::TraybillService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: TraybillService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: TraybillService) -> Self {
        Self { args, service }
    }
}
