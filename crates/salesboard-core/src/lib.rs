//! Core types and reporting functions for salesboard.
//!
//! This crate provides the foundational types used throughout the salesboard
//! backend:
//!
//! - **Identifiers**: `SaleId`
//! - **Records**: `Sale`, `SaleDraft`, `SaleUpdate`
//! - **Reports**: grouped totals, monthly totals, and the financial summary
//!
//! # Money
//!
//! Monetary fields (`amount`, `profit`, `cost`) are stored as `f64` in
//! currency units, matching the dashboard's wire format. Sums are plain
//! floating-point addition with no rounding or conversion. The three fields
//! are independent: the store never checks `amount == profit + cost`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod reports;
pub mod sale;

pub use error::ValidationError;
pub use ids::{IdError, SaleId};
pub use reports::{financials, monthly_totals, top_sales_reps, totals_by_category, totals_by_region};
pub use reports::{Financials, GroupTotal, MonthKey, MonthlyTotal, TOP_REPS_LIMIT};
pub use sale::{Sale, SaleDraft, SaleUpdate};
