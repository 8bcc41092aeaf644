//! Service layer for the asset hub.
//! - `storage` persists the whole asset collection behind the `AssetStorage` trait.
//! - `asset` holds the domain type and the list/create/delete business rules.
//! - `errors` is the error taxonomy the HTTP layer maps onto status codes.

pub mod errors;
pub mod storage;
pub mod asset;
