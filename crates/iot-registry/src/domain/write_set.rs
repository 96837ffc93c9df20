//! # Write Set
//!
//! The ordered puts a transaction makes once it has been admitted. Puts are
//! staged here after every read and check, then applied in order.

use super::errors::RegistryError;
use crate::ports::outbound::LedgerStore;

/// Ordered list of `(key, value)` puts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    puts: Vec<(String, Vec<u8>)>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a put. Order of staging is order of application.
    pub fn put(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.puts.push((key.into(), value));
    }

    pub fn len(&self) -> usize {
        self.puts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puts.is_empty()
    }

    /// Staged keys, in application order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.puts.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.puts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.puts
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_slice()))
    }

    /// Apply every put in order.
    ///
    /// Stops at the first failing put. Earlier puts are not rolled back; the
    /// error reports how many were applied.
    pub fn apply(&self, ledger: &mut dyn LedgerStore) -> Result<(), RegistryError> {
        for (applied, (key, value)) in self.puts.iter().enumerate() {
            ledger
                .put(key, value)
                .map_err(|source| RegistryError::storage(key, applied, source))?;
        }
        Ok(())
    }
}
