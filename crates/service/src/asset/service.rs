use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{Asset, NewAsset, MISSING_UPLOADER};
use super::repository::AssetRepository;
use crate::errors::ServiceError;
use crate::storage::AssetStorage;

/// Application service encapsulating the asset rules on top of an injected storage.
///
/// Every call runs its load/mutate/save cycle while holding `cycle`, so concurrent
/// requests in one process never interleave and no write is lost.
pub struct AssetService<S: AssetStorage> {
    storage: Arc<S>,
    cycle: Mutex<()>,
}

impl<S: AssetStorage> AssetService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage, cycle: Mutex::new(()) }
    }

    /// Load the collection, apply `f`, and persist only if `f` succeeds.
    async fn mutate<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Vec<Asset>) -> Result<T, ServiceError> + Send,
        T: Send,
    {
        let _guard = self.cycle.lock().await;
        let mut assets = self.storage.load().await?;
        let out = f(&mut assets)?;
        self.storage.save(&assets).await?;
        Ok(out)
    }

    pub async fn list_all(&self) -> Result<Vec<Asset>, ServiceError> {
        let _guard = self.cycle.lock().await;
        self.storage.load().await
    }

    /// Validate, assign a fresh id and place the asset at the front of the collection.
    #[instrument(skip_all)]
    pub async fn create(&self, input: NewAsset) -> Result<Asset, ServiceError> {
        let asset = input.into_asset(Uuid::new_v4().to_string())?;
        let created = asset.clone();
        self.mutate(move |assets| {
            assets.insert(0, asset);
            Ok(())
        })
        .await?;
        info!(id = %created.id, uploader = %created.uploader, "asset_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str, requesting_uploader: Option<&str>) -> Result<Asset, ServiceError> {
        let requester = requesting_uploader
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ServiceError::Validation(MISSING_UPLOADER.into()))?;

        let removed = self
            .mutate(|assets| {
                let mut hits = assets.iter().enumerate().filter(|(_, a)| a.id == id).map(|(i, _)| i);
                let idx = hits.next().ok_or_else(|| ServiceError::not_found("Asset"))?;
                if hits.next().is_some() {
                    return Err(ServiceError::Storage(format!("duplicate asset id {id} in collection")));
                }
                if assets[idx].uploader != requester {
                    warn!(%id, requester, "asset_delete_denied");
                    return Err(ServiceError::Forbidden("Not authorized to delete this asset".into()));
                }
                Ok(assets.remove(idx))
            })
            .await?;
        info!(%id, uploader = %removed.uploader, "asset_deleted");
        Ok(removed)
    }
}

#[async_trait]
impl<S: AssetStorage + 'static> AssetRepository for AssetService<S> {
    async fn list_all(&self) -> Result<Vec<Asset>, ServiceError> { self.list_all().await }
    async fn create(&self, input: NewAsset) -> Result<Asset, ServiceError> { self.create(input).await }
    async fn delete_by_id(&self, id: &str, requesting_uploader: Option<&str>) -> Result<Asset, ServiceError> {
        self.delete_by_id(id, requesting_uploader).await
    }
}
