//! # Node Configuration
//!
//! Configuration for the ledger backend, bootstrap and logging.
//!
//! ## Environment Overrides
//!
//! - `REGISTRY_STORAGE` - `memory` or `rocksdb`
//! - `REGISTRY_DATA_DIR` - RocksDB directory
//! - `REGISTRY_SYNC_WRITES` - fsync after each put (`true`/`false`)
//! - `REGISTRY_BOOTSTRAP_SEED` - counter seed string (required)
//! - `REGISTRY_LOG_LEVEL` - `trace`, `debug`, `info`, `warn` or `error`

use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn, Level};

pub const ENV_STORAGE: &str = "REGISTRY_STORAGE";
pub const ENV_DATA_DIR: &str = "REGISTRY_DATA_DIR";
pub const ENV_SYNC_WRITES: &str = "REGISTRY_SYNC_WRITES";
pub const ENV_BOOTSTRAP_SEED: &str = "REGISTRY_BOOTSTRAP_SEED";
pub const ENV_LOG_LEVEL: &str = "REGISTRY_LOG_LEVEL";

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Bootstrap configuration.
    pub bootstrap: BootstrapConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl NodeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by `lookup`. Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_STORAGE) {
            match value.parse() {
                Ok(backend) => config.storage.backend = backend,
                Err(_) => warn!("{ENV_STORAGE} must be `memory` or `rocksdb`, got {value:?}"),
            }
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_SYNC_WRITES) {
            match value.parse() {
                Ok(sync) => config.storage.sync_writes = sync,
                Err(_) => warn!("{ENV_SYNC_WRITES} must be `true` or `false`, got {value:?}"),
            }
        }
        if let Some(seed) = lookup(ENV_BOOTSTRAP_SEED) {
            config.bootstrap.seed = Some(seed);
            info!("Loaded bootstrap seed from environment");
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if Level::from_str(&level).is_ok() {
                config.logging.level = level;
            } else {
                warn!("{ENV_LOG_LEVEL} is not a log level: {level:?}");
            }
        }

        config
    }

    /// Validate configuration before the ledger is opened.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - The bootstrap seed is missing or empty
    /// - The RocksDB backend is selected but not compiled in
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.bootstrap.seed.as_deref() {
            None | Some("") => return Err(ConfigError::MissingBootstrapSeed),
            Some(_) => {}
        }
        if self.storage.backend == StorageBackend::RocksDb && !cfg!(feature = "rocksdb") {
            return Err(ConfigError::BackendUnavailable(StorageBackend::RocksDb));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No bootstrap seed was provided.
    MissingBootstrapSeed,
    /// The selected backend was not compiled into this binary.
    BackendUnavailable(StorageBackend),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingBootstrapSeed => {
                write!(
                    f,
                    "Bootstrap seed is not set. \
                     Set the {ENV_BOOTSTRAP_SEED} environment variable."
                )
            }
            ConfigError::BackendUnavailable(backend) => {
                write!(
                    f,
                    "Storage backend `{backend}` is not available. \
                     Rebuild with `--features {backend}`."
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Ledger backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local, lost on exit.
    #[default]
    Memory,
    /// Persistent RocksDB database.
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "rocksdb" => Ok(Self::RocksDb),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::RocksDb => f.write_str("rocksdb"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Ledger backend.
    pub backend: StorageBackend,
    /// Data directory for the RocksDB backend.
    pub data_dir: PathBuf,
    /// fsync after each put.
    pub sync_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data/registry"),
            sync_writes: true,
        }
    }
}

/// Bootstrap configuration.
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfig {
    /// Hashed into the counter seed on first start.
    pub seed: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum log level.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Level from the environment alone, read before logging is installed.
    pub fn from_env() -> Self {
        match std::env::var(ENV_LOG_LEVEL) {
            Ok(level) => Self { level },
            Err(_) => Self::default(),
        }
    }

    /// Parsed level, `INFO` if unparsable.
    pub fn max_level(&self) -> Level {
        Level::from_str(&self.level).unwrap_or(Level::INFO)
    }
}
