//! # Canonical Messages
//!
//! Builds the exact strings signers sign and the registry verifies. Fields are
//! joined with `:` in a fixed order; the construction is part of the wire
//! contract and must match the signer byte for byte.
//!
//! | Transaction | Message |
//! |---|---|
//! | Identity | `owner_name:data` |
//! | Thing | `owner_name(:alias)*:data:spec` |
//! | Spec | `spec_name:owner_name:data` |

use super::entities::{RegisterIdentityTx, RegisterSpecTx, RegisterThingTx};

pub const MESSAGE_SEPARATOR: char = ':';

/// A transaction record that carries a signature over a canonical message.
pub trait CanonicalMessage {
    /// The message string the transaction's signature must cover.
    fn canonical_message(&self) -> String;
}

pub fn identity_message(owner_name: &str, data: &str) -> String {
    join([owner_name, data])
}

/// Aliases are appended in caller order; an empty alias list yields
/// `owner_name:data:spec`.
pub fn thing_message(owner_name: &str, aliases: &[String], data: &str, spec: &str) -> String {
    let fields = std::iter::once(owner_name)
        .chain(aliases.iter().map(String::as_str))
        .chain([data, spec]);
    join(fields)
}

pub fn spec_message(spec_name: &str, owner_name: &str, data: &str) -> String {
    join([spec_name, owner_name, data])
}

fn join<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let mut message = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            message.push(MESSAGE_SEPARATOR);
        }
        message.push_str(field);
    }
    message
}

impl CanonicalMessage for RegisterIdentityTx {
    fn canonical_message(&self) -> String {
        identity_message(&self.owner_name, &self.data)
    }
}

impl CanonicalMessage for RegisterThingTx {
    fn canonical_message(&self) -> String {
        thing_message(&self.owner_name, &self.aliases, &self.data, &self.spec)
    }
}

impl CanonicalMessage for RegisterSpecTx {
    fn canonical_message(&self) -> String {
        spec_message(&self.spec_name, &self.owner_name, &self.data)
    }
}
