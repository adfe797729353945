//! Salesboard HTTP API Service.
//!
//! This crate provides the HTTP API for the salesboard dashboard backend,
//! including:
//!
//! - Sale record CRUD
//! - Reporting endpoints (by region, by category, top reps, monthly,
//!   financial summary)
//!
//! Handlers are stateless; the only shared resource is the store behind
//! `AppState`. Aggregation reads are full scans and are not isolated against
//! concurrent single-record writes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router even when the body is sync

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
