//! `RocksDB` storage layer for salesboard.
//!
//! This crate provides persistent storage for sale records using `RocksDB`.
//! Records live in a single column family keyed by their ULID bytes, so a
//! key-ordered scan returns records in insertion order.
//!
//! # Example
//!
//! ```no_run
//! use salesboard_store::{RocksStore, SaleStore};
//! use salesboard_core::SaleDraft;
//!
//! let store = RocksStore::open("/tmp/salesboard-db").unwrap();
//!
//! let draft = SaleDraft {
//!     product: "Laptop Pro".into(),
//!     amount: 1299.99,
//!     region: "North America".into(),
//!     customer: "TechCorp Inc.".into(),
//!     sales_rep: "John Smith".into(),
//!     date: None,
//!     category: "Electronics".into(),
//!     profit: 350.0,
//!     cost: 949.99,
//! };
//!
//! let sale = store.insert(draft).unwrap();
//! let retrieved = store.get(&sale.id).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use salesboard_core::{Sale, SaleDraft, SaleId, SaleUpdate};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations behind the HTTP service.
pub trait SaleStore: Send + Sync {
    /// Insert a new sale record.
    ///
    /// Assigns a fresh identifier and resolves a missing `date` to the
    /// insert time. Returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert(&self, draft: SaleDraft) -> Result<Sale>;

    /// Get a sale by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get(&self, id: &SaleId) -> Result<Option<Sale>>;

    /// List every sale record.
    ///
    /// Full scan in key (insertion) order; no pagination. Scans are not
    /// isolated against concurrent single-record writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn scan(&self) -> Result<Vec<Sale>>;

    /// Merge a partial update into an existing record.
    ///
    /// Fields absent from the patch are left unchanged. Never creates a
    /// record (no upsert).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record doesn't exist.
    fn update(&self, id: &SaleId, patch: SaleUpdate) -> Result<Sale>;

    /// Delete a sale by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record doesn't exist.
    fn delete(&self, id: &SaleId) -> Result<()>;
}
