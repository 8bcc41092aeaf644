//! Storage abstractions for the asset collection
//!
//! The whole collection is read and written as one document; there is no
//! incremental update. `json_file_store` is the on-disk implementation and
//! `mock` an in-memory stand-in for tests.

use async_trait::async_trait;

use crate::asset::domain::Asset;
use crate::errors::ServiceError;

pub mod json_file_store;

pub use json_file_store::JsonFileStorage;

/// Load/save capability over the full asset collection.
#[async_trait]
pub trait AssetStorage: Send + Sync {
    /// Read the full collection in storage order.
    async fn load(&self) -> Result<Vec<Asset>, ServiceError>;
    /// Replace the full collection.
    async fn save(&self, assets: &[Asset]) -> Result<(), ServiceError>;
}

/// Simple in-memory storage for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MemoryStorage {
        assets: RwLock<Vec<Asset>>,
        saves: AtomicUsize,
    }

    impl MemoryStorage {
        pub fn new() -> Self { Self::default() }

        pub fn with_assets(assets: Vec<Asset>) -> Self {
            Self { assets: RwLock::new(assets), saves: AtomicUsize::new(0) }
        }

        /// Number of `save` calls observed so far.
        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetStorage for MemoryStorage {
        async fn load(&self) -> Result<Vec<Asset>, ServiceError> {
            Ok(self.assets.read().await.clone())
        }

        async fn save(&self, assets: &[Asset]) -> Result<(), ServiceError> {
            *self.assets.write().await = assets.to_vec();
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
