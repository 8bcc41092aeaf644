use async_trait::async_trait;

use super::domain::{Asset, NewAsset};
use crate::errors::ServiceError;

/// Repository abstraction the HTTP layer talks to.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Asset>, ServiceError>;
    async fn create(&self, input: NewAsset) -> Result<Asset, ServiceError>;
    /// Remove the asset owned by `requesting_uploader`; returns the removed record.
    async fn delete_by_id(&self, id: &str, requesting_uploader: Option<&str>) -> Result<Asset, ServiceError>;
}
