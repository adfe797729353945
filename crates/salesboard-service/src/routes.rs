//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, reports, sales};
use crate::state::AppState;

/// Maximum concurrent requests for API endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Sales CRUD
/// - `GET /api/sales` - List all sales
/// - `POST /api/sales` - Create a sale
/// - `GET /api/sales/:id` - Fetch one sale
/// - `PUT /api/sales/:id` - Update a sale
/// - `DELETE /api/sales/:id` - Delete a sale
///
/// ## Reports
/// - `GET /api/sales/by-region` - Totals grouped by region
/// - `GET /api/sales/by-category` - Totals grouped by category
/// - `GET /api/sales/top-sales-reps` - Top five reps by total amount
/// - `GET /api/sales/monthly` - Monthly totals, ascending
/// - `GET /api/sales/financials` - Revenue/profit/cost summary
///
/// Static report paths are registered alongside `/:id`; axum matches static
/// segments before the capture, so `by-region` is never parsed as an id.
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let sales_routes = Router::new()
        .route("/", get(sales::list_sales).post(sales::create_sale))
        // Reports
        .route("/by-region", get(reports::sales_by_region))
        .route("/by-category", get(reports::sales_by_category))
        .route("/top-sales-reps", get(reports::top_sales_reps))
        .route("/monthly", get(reports::monthly_sales))
        .route("/financials", get(reports::financials))
        // Record by id
        .route(
            "/:id",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        // API routes
        .nest("/api/sales", sales_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
