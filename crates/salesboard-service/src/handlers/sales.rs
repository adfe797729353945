//! Sale record CRUD handlers.
//!
//! Request bodies are deserialized from raw JSON so that malformed input,
//! unknown fields included, surfaces as a 400 with the service's error body
//! rather than axum's default rejection.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use salesboard_core::{Sale, SaleDraft, SaleId, SaleUpdate};
use salesboard_store::SaleStore;

use crate::error::ApiError;
use crate::state::AppState;

/// List every sale record. Full scan, no pagination.
pub async fn list_sales(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Sale>>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(sales))
}

/// Create a new sale.
pub async fn create_sale(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    let draft: SaleDraft =
        serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    draft.validate()?;

    let sale = state.store.insert(draft)?;

    tracing::info!(sale_id = %sale.id, product = %sale.product, "Sale created");

    Ok((StatusCode::CREATED, Json(sale)))
}

/// Fetch a single sale by id.
pub async fn get_sale(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Sale>, ApiError> {
    let id = parse_id(&id)?;
    let sale = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound("Sale not found".into()))?;

    Ok(Json(sale))
}

/// Merge a partial update into an existing sale. Never upserts.
pub async fn update_sale(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Sale>, ApiError> {
    let id = parse_id(&id)?;
    let patch: SaleUpdate =
        serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    patch.validate()?;

    let sale = state.store.update(&id, patch)?;

    tracing::info!(sale_id = %sale.id, "Sale updated");

    Ok(Json(sale))
}

/// Delete a sale. Deleting an unknown id reports 404, not success.
pub async fn delete_sale(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(&id)?;

    tracing::info!(sale_id = %id, "Sale deleted");

    Ok(Json(serde_json::json!({ "deleted": true })))
}

fn parse_id(raw: &str) -> Result<SaleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid sale id: {raw}")))
}
