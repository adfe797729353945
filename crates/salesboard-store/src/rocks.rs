//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `SaleStore`
//! trait. Each write touches a single record, so the store relies on
//! `RocksDB`'s single-key atomicity and needs no batching or rollback.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};

use salesboard_core::{Sale, SaleDraft, SaleId, SaleUpdate};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::SaleStore;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn put_sale(&self, sale: &Sale) -> Result<()> {
        let cf = self.cf(cf::SALES)?;
        let key = keys::sale_key(&sale.id);
        let value = Self::serialize(sale)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}

impl SaleStore for RocksStore {
    fn insert(&self, draft: SaleDraft) -> Result<Sale> {
        let sale = draft.into_sale(SaleId::generate(), chrono::Utc::now());
        self.put_sale(&sale)?;

        tracing::debug!(sale_id = %sale.id, product = %sale.product, "Sale inserted");

        Ok(sale)
    }

    fn get(&self, id: &SaleId) -> Result<Option<Sale>> {
        let cf = self.cf(cf::SALES)?;
        let key = keys::sale_key(id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn scan(&self) -> Result<Vec<Sale>> {
        let cf = self.cf(cf::SALES)?;

        let mut sales = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            sales.push(Self::deserialize(&value)?);
        }

        Ok(sales)
    }

    fn update(&self, id: &SaleId, patch: SaleUpdate) -> Result<Sale> {
        let mut sale = self.get(id)?.ok_or(StoreError::NotFound)?;

        patch.apply_to(&mut sale);
        self.put_sale(&sale)?;

        tracing::debug!(sale_id = %sale.id, "Sale updated");

        Ok(sale)
    }

    fn delete(&self, id: &SaleId) -> Result<()> {
        let cf = self.cf(cf::SALES)?;
        let key = keys::sale_key(id);

        if self.get(id)?.is_none() {
            return Err(StoreError::NotFound);
        }

        self.db
            .delete_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(sale_id = %id, "Sale deleted");

        Ok(())
    }
}
