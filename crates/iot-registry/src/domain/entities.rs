//! # Domain Entities
//!
//! Transaction records submitted by registrants, and the records persisted
//! under the ledger keyspace once a transaction is admitted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Transaction Records
// =============================================================================

/// Binds a new owner name to a self-asserted public key.
///
/// Signed over `owner_name:data` with the private key matching `public_key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterIdentityTx {
    /// Name to claim. Globally unique and immutable once written.
    pub owner_name: String,
    /// SEC1-encoded secp256k1 public key (compressed or uncompressed)
    pub public_key: Vec<u8>,
    /// Free-form payload covered by the signature but not stored
    pub data: String,
    /// DER-encoded ECDSA signature
    pub signature: Vec<u8>,
}

/// Registers a thing (device) under an existing owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterThingTx {
    /// Caller-supplied identifier of the thing
    pub nonce: Vec<u8>,
    /// Registered identity that owns the thing and signs the transaction
    pub owner_name: String,
    /// Human-readable names the thing can be looked up by, in signing order
    pub aliases: Vec<String>,
    /// Name of the spec this thing claims to implement
    pub spec: String,
    pub data: String,
    /// DER-encoded ECDSA signature by the owner's key
    pub signature: Vec<u8>,
}

/// Registers a reusable device-type spec under an existing owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSpecTx {
    pub spec_name: String,
    pub owner_name: String,
    pub data: String,
    /// DER-encoded ECDSA signature by the owner's key
    pub signature: Vec<u8>,
}

// =============================================================================
// Stored Records
// =============================================================================

/// Stored under `OwnerName: <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub owner_name: String,
    pub public_key: Vec<u8>,
}

/// Stored under `Alias:<alias>`, pointing back at the thing's nonce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub nonce: Vec<u8>,
}

/// Stored under `Thing: <hex(nonce)>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thing {
    pub aliases: Vec<String>,
    pub owner_name: String,
    pub data: String,
    pub spec: String,
}

/// Stored under `Spec: <spec_name>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub owner_name: String,
    pub data: String,
}

impl From<&RegisterIdentityTx> for Identity {
    fn from(tx: &RegisterIdentityTx) -> Self {
        Self {
            owner_name: tx.owner_name.clone(),
            public_key: tx.public_key.clone(),
        }
    }
}

impl From<&RegisterThingTx> for Thing {
    fn from(tx: &RegisterThingTx) -> Self {
        Self {
            aliases: tx.aliases.clone(),
            owner_name: tx.owner_name.clone(),
            data: tx.data.clone(),
            spec: tx.spec.clone(),
        }
    }
}

impl From<&RegisterSpecTx> for Spec {
    fn from(tx: &RegisterSpecTx) -> Self {
        Self {
            owner_name: tx.owner_name.clone(),
            data: tx.data.clone(),
        }
    }
}
