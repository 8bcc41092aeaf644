use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::info;

use common::types::MessageBody;
use service::asset::{Asset, DeleteAssetInput, NewAsset};

use crate::{errors::ApiError, observability, state::AppState};

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

/// Parse a JSON body, treating a missing, malformed or non-JSON body as one with every field absent.
fn lenient_body<T: DeserializeOwned + Default>(headers: &HeaderMap, body: &Bytes) -> T {
    if !is_json(headers) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_default()
}

#[utoipa::path(
    get, path = "/assets", tag = "assets",
    responses(
        (status = 200, description = "All assets, most recent first", body = [crate::openapi::AssetDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_assets(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, ApiError> {
    let assets = state.assets.list_all().await?;
    info!(count = assets.len(), "list assets");
    Ok(Json(assets))
}

#[utoipa::path(
    post, path = "/assets", tag = "assets",
    request_body = crate::openapi::NewAssetDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AssetDoc),
        (status = 400, description = "Missing required fields", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let input: NewAsset = lenient_body(&headers, &body);
    let asset = state.assets.create(input).await?;
    observability::ASSETS_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(asset)))
}

#[utoipa::path(
    delete, path = "/assets/{id}", tag = "assets",
    params(("id" = String, Path, description = "Asset ID")),
    request_body = crate::openapi::DeleteAssetDoc,
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Uploader missing", body = crate::openapi::MessageDoc),
        (status = 403, description = "Uploader mismatch", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageBody>, ApiError> {
    let input: DeleteAssetInput = lenient_body(&headers, &body);
    state.assets.delete_by_id(&id, input.requester()).await?;
    observability::ASSETS_DELETED_TOTAL.inc();
    Ok(Json(MessageBody::new("Asset deleted successfully")))
}
