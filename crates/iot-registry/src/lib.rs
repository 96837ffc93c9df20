//! # IoT Registry
//!
//! Transaction-processing core of a registry that binds human-chosen names to
//! secp256k1 identities and lets those identities register things (devices)
//! and reusable specs on an external key-value ledger.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Records, keyspace, canonical messages, ECDSA, no I/O
//! - **Ports Layer** (`ports/`): `RegistryApi` (inbound) and `LedgerStore` (outbound)
//! - **Adapters Layer** (`adapters/`): In-memory ledger and the command dispatcher
//! - **Service Layer** (`service.rs`): The registration state machine
//!
//! ## Trust Model
//!
//! - **Trust on first use**: the public key presented when a name is registered
//!   is authoritative for that name forever. There is no external PKI.
//! - **Authorization chaining**: every thing/spec write must be signed by the
//!   key stored for the owning identity.
//! - **Read-then-write staging**: every read and signature check of a
//!   transaction completes before its first put.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::dispatch::{CommandDispatcher, InvokeCommand, QueryCommand};
pub use adapters::memory::InMemoryLedger;
pub use domain::codec::{decode_hex_record, decode_record, encode_hex_record, encode_record};
pub use domain::ecdsa::{sha256, EcdsaVerifier};
pub use domain::entities::{
    AliasRecord, Identity, RegisterIdentityTx, RegisterSpecTx, RegisterThingTx, Spec, Thing,
};
pub use domain::errors::{AuthFailure, ConflictKind, RecordKind, RegistryError, StoreError};
pub use domain::keyspace::LedgerKey;
pub use domain::messages::CanonicalMessage;
pub use domain::projections::{OwnerView, SpecView, ThingView};
pub use domain::write_set::WriteSet;
pub use ports::inbound::RegistryApi;
pub use ports::outbound::LedgerStore;
pub use service::RegistryService;
