//! Reporting handlers.
//!
//! Each endpoint scans the full collection and reduces it with the pure
//! functions from `salesboard_core::reports`. Summaries are derived per
//! request; nothing is cached.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use salesboard_core::reports;
use salesboard_core::{Financials, GroupTotal, MonthlyTotal};
use salesboard_store::SaleStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Totals grouped by region.
pub async fn sales_by_region(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GroupTotal>>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(reports::totals_by_region(&sales)))
}

/// Totals grouped by product category.
pub async fn sales_by_category(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GroupTotal>>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(reports::totals_by_category(&sales)))
}

/// Top five sales representatives by summed amount.
pub async fn top_sales_reps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GroupTotal>>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(reports::top_sales_reps(&sales)))
}

/// Totals bucketed by calendar month, ascending.
pub async fn monthly_sales(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyTotal>>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(reports::monthly_totals(&sales)))
}

/// Whole-collection financial summary, zero-defaulted when empty.
pub async fn financials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Financials>, ApiError> {
    let sales = state.store.scan()?;
    Ok(Json(reports::financials(&sales)))
}
