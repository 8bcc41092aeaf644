//! Asset records and the business rules around them.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Asset, DeleteAssetInput, NewAsset};
pub use repository::AssetRepository;
pub use service::AssetService;
