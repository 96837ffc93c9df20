//! # RocksDB Ledger
//!
//! Persistent `LedgerStore` on a single RocksDB column family.
//!
//! Keys are the registry's UTF-8 ledger keys stored as raw bytes. Each put is
//! its own write; with `sync_writes` it is fsynced before returning.

use iot_registry::{LedgerStore, StoreError};
use parking_lot::RwLock;
use rocksdb::{Options, WriteOptions, DB};
use std::path::Path;
use std::sync::Arc;

/// RocksDB-backed ledger.
pub struct RocksDbLedger {
    db: Arc<RwLock<DB>>,
    sync_writes: bool,
}

impl RocksDbLedger {
    /// Open or create the database at `path`.
    pub fn open(path: impl AsRef<Path>, sync_writes: bool) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, path.as_ref()).map_err(|e| StoreError::Io {
            message: format!("Failed to open RocksDB: {}", e),
        })?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            sync_writes,
        })
    }

    /// Flush memtables to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        let db = self.db.read();
        db.flush().map_err(|e| StoreError::Io {
            message: format!("RocksDB flush failed: {}", e),
        })
    }
}

impl LedgerStore for RocksDbLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let db = self.db.read();
        db.get(key.as_bytes()).map_err(|e| StoreError::Io {
            message: format!("RocksDB get failed: {}", e),
        })
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let db = self.db.write();
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.sync_writes);

        db.put_opt(key.as_bytes(), value, &write_opts)
            .map_err(|e| StoreError::Io {
                message: format!("RocksDB put failed: {}", e),
            })
    }
}
