//! Salesboard Client SDK.
//!
//! This crate provides a client library for consumers of the salesboard API,
//! mirroring the REST surface the dashboard frontend uses.
//!
//! # Example
//!
//! ```no_run
//! use salesboard_client::SalesboardClient;
//! use salesboard_core::SaleDraft;
//!
//! # async fn example() -> Result<(), salesboard_client::ClientError> {
//! let client = SalesboardClient::new("http://localhost:5000");
//!
//! let sale = client.create_sale(&SaleDraft {
//!     product: "Laptop Pro".into(),
//!     amount: 1299.99,
//!     region: "North America".into(),
//!     customer: "TechCorp Inc.".into(),
//!     sales_rep: "John Smith".into(),
//!     date: None,
//!     category: "Electronics".into(),
//!     profit: 350.0,
//!     cost: 949.99,
//! }).await?;
//!
//! let summary = client.financials().await?;
//! println!("Revenue after {}: {}", sale.id, summary.total_revenue);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, HealthStatus, SalesboardClient};
pub use error::ClientError;
