//! # Outbound Ports (Driven Ports / SPI)
//!
//! The ledger key-value store the registry reads and writes through.

use crate::domain::errors::StoreError;

/// Abstract interface to the ledger's key-value state.
///
/// Scoped to one transaction's read/write set: writes must be visible to
/// later reads in the same invocation. No multi-key atomicity is assumed.
///
/// Production: `RocksDbLedger` (registry-node, `rocksdb` feature)
/// Testing: `InMemoryLedger` (adapters/memory.rs)
pub trait LedgerStore {
    /// Get the value stored under `key`. An empty value means absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}
