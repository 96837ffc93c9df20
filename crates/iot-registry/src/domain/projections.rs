//! # Query Projections
//!
//! Read-only, field-for-field copies of stored records for external
//! serialization. Field names follow the registry's JSON surface.

use super::entities::{Identity, Spec, Thing};
use serde::{Deserialize, Serialize};

/// Projection of a stored identity. The public key is lowercase hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnerView {
    pub owner_name: String,
    pub pubkey: String,
}

/// Projection of a stored thing, including the nonce it was resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThingView {
    /// Lowercase hex nonce
    pub nonce: String,
    pub aliases: Vec<String>,
    pub owner_name: String,
    pub data: String,
    pub spec: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecView {
    pub spec_name: String,
    pub owner_name: String,
    pub data: String,
}

impl OwnerView {
    pub fn from_record(identity: &Identity) -> Self {
        Self {
            owner_name: identity.owner_name.clone(),
            pubkey: hex::encode(&identity.public_key),
        }
    }
}

impl ThingView {
    pub fn from_record(nonce_hex: &str, thing: &Thing) -> Self {
        Self {
            nonce: nonce_hex.to_string(),
            aliases: thing.aliases.clone(),
            owner_name: thing.owner_name.clone(),
            data: thing.data.clone(),
            spec: thing.spec.clone(),
        }
    }
}

impl SpecView {
    pub fn from_record(spec_name: &str, spec: &Spec) -> Self {
        Self {
            spec_name: spec_name.to_string(),
            owner_name: spec.owner_name.clone(),
            data: spec.data.clone(),
        }
    }
}
