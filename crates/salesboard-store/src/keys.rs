//! Key encoding utilities for `RocksDB`.

use salesboard_core::{IdError, SaleId};

/// Create a sale key from a sale ID.
///
/// ULID bytes sort by timestamp, so key order is insertion order.
#[must_use]
pub fn sale_key(id: &SaleId) -> Vec<u8> {
    id.to_bytes().to_vec()
}

/// Decode a sale ID from a stored key.
///
/// # Errors
///
/// Returns an error if the key is not exactly 16 ULID bytes.
pub fn decode_sale_key(key: &[u8]) -> Result<SaleId, IdError> {
    let bytes: [u8; 16] = key.try_into().map_err(|_| IdError::InvalidUlid)?;
    SaleId::from_bytes(bytes)
}
