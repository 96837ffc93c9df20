//! # Ledger Backends
//!
//! `LedgerStore` implementations the node can run on.
//!
//! ## Usage
//!
//! Enable the `rocksdb` feature for the persistent backend:
//!
//! ```toml
//! registry-node = { path = "...", features = ["rocksdb"] }
//! ```

#[cfg(feature = "rocksdb")]
pub mod rocksdb_ledger;

#[cfg(feature = "rocksdb")]
pub use rocksdb_ledger::RocksDbLedger;

use crate::config::{StorageBackend, StorageConfig};
use iot_registry::{InMemoryLedger, LedgerStore, StoreError};
use tracing::info;

/// The ledger the node was configured with.
pub enum LedgerBackend {
    Memory(InMemoryLedger),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbLedger),
}

impl LedgerBackend {
    pub fn kind(&self) -> StorageBackend {
        match self {
            LedgerBackend::Memory(_) => StorageBackend::Memory,
            #[cfg(feature = "rocksdb")]
            LedgerBackend::RocksDb(_) => StorageBackend::RocksDb,
        }
    }
}

impl LedgerStore for LedgerBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self {
            LedgerBackend::Memory(ledger) => ledger.get(key),
            #[cfg(feature = "rocksdb")]
            LedgerBackend::RocksDb(ledger) => ledger.get(key),
        }
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        match self {
            LedgerBackend::Memory(ledger) => ledger.put(key, value),
            #[cfg(feature = "rocksdb")]
            LedgerBackend::RocksDb(ledger) => ledger.put(key, value),
        }
    }
}

/// Open the configured ledger backend.
pub fn open_ledger(config: &StorageConfig) -> Result<LedgerBackend, StoreError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory ledger");
            Ok(LedgerBackend::Memory(InMemoryLedger::new()))
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            info!(path = %config.data_dir.display(), "Opening RocksDB ledger");
            RocksDbLedger::open(&config.data_dir, config.sync_writes).map(LedgerBackend::RocksDb)
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => Err(StoreError::Io {
            message: "RocksDB backend not compiled in".to_string(),
        }),
    }
}
