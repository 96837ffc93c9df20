//! # Record Codec
//!
//! Deterministic binary encoding for transaction and stored records
//! (`bincode`), plus the hex wrapping used for transaction arguments.

use super::errors::RegistryError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode_record<T: Serialize>(record: &T) -> Result<Vec<u8>, RegistryError> {
    bincode::serialize(record).map_err(RegistryError::malformed)
}

pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RegistryError> {
    bincode::deserialize(bytes).map_err(RegistryError::malformed)
}

/// Encode a record and hex it, as a transaction argument.
pub fn encode_hex_record<T: Serialize>(record: &T) -> Result<String, RegistryError> {
    encode_record(record).map(hex::encode)
}

/// Decode a hex transaction argument into a record.
pub fn decode_hex_record<T: DeserializeOwned>(argument: &str) -> Result<T, RegistryError> {
    let bytes = hex::decode(argument).map_err(|e| RegistryError::MalformedEncoding {
        reason: format!("Invalid argument ({argument}) expected hex: {e}"),
    })?;
    decode_record(&bytes)
}
