use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::response_types::{ResourceCatalog, VersionResponse};

pub async fn list_resources(State(state): State<Arc<AppState>>) -> Json<ResourceCatalog> {
    let resources = state.list_service.policies().iter().map(|p| p.describe()).collect();
    Json(ResourceCatalog { resources })
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

pub async fn health() -> &'static str {
    "ok"
}
