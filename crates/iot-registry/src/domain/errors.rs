//! # Registry Errors
//!
//! Error types for registry transactions and queries.
//!
//! Every failure aborts the current transaction and is surfaced to the caller
//! as one of these values. Nothing is retried here.

use std::fmt;
use thiserror::Error;

/// Which uniqueness namespace a rejected name collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    OwnerName,
    Nonce,
    /// An alias collided with a registered owner name
    Alias,
    Spec,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConflictKind::OwnerName => "OwnerName",
            ConflictKind::Nonce => "Nonce",
            ConflictKind::Alias => "Alias",
            ConflictKind::Spec => "SpecName",
        };
        f.write_str(label)
    }
}

/// Which record type a query was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Owner,
    Thing,
    Spec,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Owner => "OwnerName",
            RecordKind::Thing => "Thing",
            RecordKind::Spec => "Spec",
        };
        f.write_str(label)
    }
}

/// Reasons a signature check can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Public key bytes are not a valid SEC1 secp256k1 point
    #[error("Invalid creator key")]
    InvalidKey,

    /// Signature bytes are not a valid DER ECDSA signature
    #[error("Bad creator signature encoding")]
    InvalidSignature,

    /// Signature is well-formed but does not verify for the message and key
    #[error("Invalid creator signature")]
    BadSignature,
}

/// Errors raised by the underlying ledger store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend I/O failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// In-process store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Errors that can occur while processing a registry transaction or query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Argument is not valid hex, or not a valid serialized record
    #[error("Malformed encoding: {reason}")]
    MalformedEncoding { reason: String },

    /// Query target is absent
    #[error("{kind} ({key}) does not exist")]
    NotFound { kind: RecordKind, key: String },

    /// OwnerName, Nonce, Alias or Spec is already taken
    #[error("{kind} ({name}) is unavailable")]
    NameConflict { kind: ConflictKind, name: String },

    /// Referenced owner identity has not been registered
    #[error("OwnerName ({name}) is not registered")]
    UnknownOwner { name: String },

    /// Bad key encoding, bad signature encoding, or signature mismatch
    #[error("Error verifying signature: {0}")]
    AuthFailure(#[from] AuthFailure),

    /// Ledger get/put failed. `applied` counts the puts of this transaction
    /// that were already written when the failure happened.
    #[error("Storage failure at ({key}) after {applied} applied writes: {source}")]
    StorageFailure {
        key: String,
        applied: usize,
        #[source]
        source: StoreError,
    },

    /// Dispatcher received a command name it does not route
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    /// Dispatcher received fewer arguments than the command needs
    #[error("Missing argument for {command}")]
    MissingArgument { command: String },
}

impl RegistryError {
    pub(crate) fn malformed(reason: impl fmt::Display) -> Self {
        RegistryError::MalformedEncoding {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn storage(key: &str, applied: usize, source: StoreError) -> Self {
        RegistryError::StorageFailure {
            key: key.to_string(),
            applied,
            source,
        }
    }

    /// True when the error was caused by the transaction itself rather than
    /// the ledger backend, i.e. resubmitting it unchanged cannot succeed.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, RegistryError::StorageFailure { .. })
    }
}
