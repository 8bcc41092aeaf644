use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::AssetStorage;
use crate::asset::domain::Asset;
use crate::errors::ServiceError;

/// Asset collection persisted as one pretty-printed JSON array.
///
/// Every `save` rewrites the file in full; there is no atomic rename, so a
/// crash mid-write can leave a truncated document behind.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    file_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl AssetStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Asset>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ServiceError::Storage(format!(
                    "cannot read {}: {e}",
                    self.file_path.display()
                )))
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let assets: Vec<Asset> = serde_json::from_slice(&bytes).map_err(|e| {
            ServiceError::Storage(format!("cannot parse {}: {e}", self.file_path.display()))
        })?;
        debug!(path = %self.file_path.display(), count = assets.len(), "assets loaded");
        Ok(assets)
    }

    async fn save(&self, assets: &[Asset]) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }
        let data = serde_json::to_vec_pretty(assets).map_err(ServiceError::storage)?;
        fs::write(&self.file_path, data).await.map_err(|e| {
            ServiceError::Storage(format!("cannot write {}: {e}", self.file_path.display()))
        })?;
        debug!(path = %self.file_path.display(), count = assets.len(), "assets saved");
        Ok(())
    }
}
