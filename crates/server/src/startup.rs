use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::anyhow;
use axum::Router;
use common::env::ensure_data_dir;
use configs::{AppConfig, StorageConfig};
use service::{
    asset::AssetService,
    storage::{AssetStorage, JsonFileStorage},
};
use tracing::info;

use crate::{routes, state::AppState};

/// Open the backing file and build handler state.
///
/// The collection is loaded once here so that a corrupt file stops startup
/// instead of failing every request.
pub async fn build_state(cfg: &StorageConfig) -> anyhow::Result<AppState> {
    ensure_data_dir(&cfg.data_file).await?;
    let storage = Arc::new(JsonFileStorage::new(&cfg.data_file));
    let existing = storage
        .load()
        .await
        .map_err(|e| anyhow!("cannot load asset collection: {e}"))?;
    info!(path = %storage.path().display(), count = existing.len(), "asset collection loaded");
    Ok(AppState::new(Arc::new(AssetService::new(storage))))
}

/// Public entry: build the app and serve until `shutdown` resolves
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg.storage).await?;
    let app: Router = routes::build_router(state, routes::build_cors());

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "asset hub backend running at http://{}", addr);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
