//! HTTP API server for roster.

#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use roster_service::ListService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use response_types::{ResourceCatalog, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Service behind every list route
    pub list_service: Arc<ListService>,
}

impl AppState {
    #[must_use]
    pub fn new(list_service: Arc<ListService>) -> Self {
        Self { list_service }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::catalog::health))
        .route("/api/version", get(handlers::catalog::version))
        .route("/api/resources", get(handlers::catalog::list_resources))
        .route("/api/{resource}", get(handlers::lists::list_json))
        .route("/api/{resource}/list", post(handlers::lists::list_protobuf))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
