use std::sync::Arc;

use service::asset::AssetRepository;

/// Shared handler state: the repository every asset route goes through.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<dyn AssetRepository>,
}

impl AppState {
    pub fn new(assets: Arc<dyn AssetRepository>) -> Self {
        Self { assets }
    }
}
