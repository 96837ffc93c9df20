//! # Ledger Keyspace
//!
//! Builds and parses the namespaced string keys the registry writes to the
//! ledger. The prefixes are part of the persisted format and are matched
//! byte for byte, including the trailing space on all prefixes but `Alias:`.
//!
//! Two namespaces are checked in a different place than they are written:
//! - the duplicate-nonce check reads `Nonce: <hex>` while things are stored
//!   under `Thing: <hex>`, so it never observes an earlier thing;
//! - alias uniqueness is checked against `OwnerName: <alias>` while aliases
//!   are stored under `Alias:<alias>`, so two things may share an alias.
//!
//! Both are preserved as-is; see DESIGN.md.

use std::fmt;

pub const OWNER_PREFIX: &str = "OwnerName: ";
pub const NONCE_PREFIX: &str = "Nonce: ";
pub const THING_PREFIX: &str = "Thing: ";
pub const ALIAS_PREFIX: &str = "Alias:";
pub const SPEC_PREFIX: &str = "Spec: ";

/// Fixed key holding SHA-256 of the operator bootstrap string.
pub const COUNTER_SEED_KEY: &str = "CounterSeed";

pub fn owner_key(name: &str) -> String {
    format!("{OWNER_PREFIX}{name}")
}

/// Key probed by the duplicate-nonce check. Nothing is ever written here.
pub fn nonce_key(nonce: &[u8]) -> String {
    format!("{NONCE_PREFIX}{}", hex::encode(nonce))
}

pub fn thing_key(nonce: &[u8]) -> String {
    thing_key_from_hex(&hex::encode(nonce))
}

/// Thing key for an identifier that is already lowercase hex.
pub fn thing_key_from_hex(nonce_hex: &str) -> String {
    format!("{THING_PREFIX}{nonce_hex}")
}

pub fn alias_key(alias: &str) -> String {
    format!("{ALIAS_PREFIX}{alias}")
}

pub fn spec_key(spec_name: &str) -> String {
    format!("{SPEC_PREFIX}{spec_name}")
}

/// A parsed ledger key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKey<'a> {
    Owner(&'a str),
    /// Hex nonce
    Nonce(&'a str),
    /// Hex nonce
    Thing(&'a str),
    Alias(&'a str),
    Spec(&'a str),
    CounterSeed,
}

impl<'a> LedgerKey<'a> {
    /// Parse a raw ledger key. Returns `None` for keys outside the registry
    /// keyspace.
    pub fn parse(key: &'a str) -> Option<Self> {
        if key == COUNTER_SEED_KEY {
            return Some(LedgerKey::CounterSeed);
        }
        if let Some(name) = key.strip_prefix(OWNER_PREFIX) {
            return Some(LedgerKey::Owner(name));
        }
        if let Some(nonce) = key.strip_prefix(NONCE_PREFIX) {
            return Some(LedgerKey::Nonce(nonce));
        }
        if let Some(nonce) = key.strip_prefix(THING_PREFIX) {
            return Some(LedgerKey::Thing(nonce));
        }
        if let Some(alias) = key.strip_prefix(ALIAS_PREFIX) {
            return Some(LedgerKey::Alias(alias));
        }
        key.strip_prefix(SPEC_PREFIX).map(LedgerKey::Spec)
    }

    /// The identifier part of the key (empty for the seed key).
    pub fn identifier(&self) -> &'a str {
        match self {
            LedgerKey::Owner(id)
            | LedgerKey::Nonce(id)
            | LedgerKey::Thing(id)
            | LedgerKey::Alias(id)
            | LedgerKey::Spec(id) => id,
            LedgerKey::CounterSeed => "",
        }
    }
}

impl fmt::Display for LedgerKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerKey::Owner(name) => write!(f, "{OWNER_PREFIX}{name}"),
            LedgerKey::Nonce(nonce) => write!(f, "{NONCE_PREFIX}{nonce}"),
            LedgerKey::Thing(nonce) => write!(f, "{THING_PREFIX}{nonce}"),
            LedgerKey::Alias(alias) => write!(f, "{ALIAS_PREFIX}{alias}"),
            LedgerKey::Spec(name) => write!(f, "{SPEC_PREFIX}{name}"),
            LedgerKey::CounterSeed => f.write_str(COUNTER_SEED_KEY),
        }
    }
}
