//! Product endpoints
//!
//! Handlers only decode input, call the controller and wrap the reply in
//! the response envelope. Path ids are passed through untouched.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::envelope;
use super::error::ApiError;
use super::server::AppState;
use crate::models::ProductRequest;

/// POST /product - create a product
pub async fn insert(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let reply = state.controller().insert(&req).await?;

    let location = format!("/product/{}", reply.data);
    Ok((
        [(header::LOCATION, location)],
        envelope::success(reply.status, reply.message),
    )
        .into_response())
}

/// PATCH /product/{id} - overwrite name and price
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let reply = state.controller().update(&id, &req).await?;
    Ok(envelope::success(reply.status, reply.message))
}

/// DELETE /product/{id} - soft delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let reply = state.controller().delete(&id).await?;
    Ok(envelope::success(reply.status, reply.message))
}

/// GET /product - all active products
pub async fn get_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let reply = state.controller().get_all().await?;
    Ok(envelope::data(reply.status, reply.data))
}

/// GET /product/{id} - one active product, as a single-element array
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let reply = state.controller().get(&id).await?;
    Ok(envelope::data(reply.status, vec![reply.data]))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
