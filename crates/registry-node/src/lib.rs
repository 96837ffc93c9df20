//! # Registry Node
//!
//! Host process for the IoT registry.
//!
//! ## Modular Structure
//!
//! - `config` - Node configuration, loaded from the environment
//! - `storage` - Ledger backends (in-memory, RocksDB behind the `rocksdb` feature)
//! - `runtime` - Bootstrap and the command line loop
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load and validate configuration
//! 3. Open the ledger backend
//! 4. Write the counter seed (only if absent)
//! 5. Serve commands from stdin until EOF or Ctrl+C

pub mod config;
pub mod runtime;
pub mod storage;

pub use config::{BootstrapConfig, ConfigError, LoggingConfig, NodeConfig, StorageBackend, StorageConfig};
pub use runtime::{NodeRuntime, Response};
pub use storage::{open_ledger, LedgerBackend};
