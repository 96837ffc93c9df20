//! # In-Memory Ledger
//!
//! `LedgerStore` backed by a `BTreeMap`, with optional fault injection for
//! exercising storage-failure paths.

use crate::domain::errors::StoreError;
use crate::ports::outbound::LedgerStore;
use std::collections::BTreeMap;

/// In-memory ledger for unit tests and ephemeral nodes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    data: BTreeMap<String, Vec<u8>>,
    /// Puts succeed this many times, then fail
    fail_puts_after: Option<usize>,
    puts: usize,
    fail_reads: bool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every put after the first `count` fail with an I/O error.
    pub fn fail_puts_after(mut self, count: usize) -> Self {
        self.fail_puts_after = Some(count);
        self
    }

    /// Make every get fail with an I/O error.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// All keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io {
                message: "injected read failure".to_string(),
            });
        }
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if let Some(limit) = self.fail_puts_after {
            if self.puts >= limit {
                return Err(StoreError::Io {
                    message: "injected put failure".to_string(),
                });
            }
        }
        self.puts += 1;
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
