use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use prost::Message;
use roster_core::{ListRequest, PROTOBUF_CONTENT_TYPE, Page, Resource};
use serde_json::Value;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::list_request_from_params;

fn parse_resource(raw: &str) -> Result<Resource, ApiError> {
    raw.parse().map_err(|e: roster_core::CoreError| ApiError::NotFound(e.to_string()))
}

/// `GET /api/{resource}`: one page of rows as JSON.
pub async fn list_json(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Page<Value>>, ApiError> {
    let resource = parse_resource(&resource)?;
    let request = list_request_from_params(resource, &params)?;
    let page = state.list_service.list(resource, &request).await?;
    Ok(Json(page))
}

/// `POST /api/{resource}/list`: protobuf `ListRequest` in, `List*Response` out.
pub async fn list_protobuf(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let resource = parse_resource(&resource)?;
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or("");
    if !content_type.starts_with(PROTOBUF_CONTENT_TYPE) {
        return Err(ApiError::UnsupportedMediaType(format!(
            "expected {PROTOBUF_CONTENT_TYPE}, got '{content_type}'"
        )));
    }
    let request = ListRequest::decode(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid ListRequest: {e}")))?;
    let encoded = state.list_service.list_encoded(resource, &request).await?;
    Ok(([(CONTENT_TYPE, PROTOBUF_CONTENT_TYPE)], encoded).into_response())
}
