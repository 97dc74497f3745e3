use std::sync::Arc;

use ladle_core::application::LadleService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LadleService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LadleService) -> Self {
        Self { args, service }
    }
}
