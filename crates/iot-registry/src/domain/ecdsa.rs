//! # ECDSA Verification (secp256k1)
//!
//! Pure domain logic for verifying registrant signatures.
//!
//! ## Verification Steps
//!
//! 1. Parse the public key as a SEC1 point on secp256k1 (compressed or uncompressed)
//! 2. Parse the signature from its DER encoding
//! 3. Digest the UTF-8 message with SHA-256
//! 4. Standard ECDSA verification of the digest against the key
//!
//! High-S signatures are normalized before verification, so both members of a
//! malleable pair verify. Registrants' signatures are bound to a name that can
//! only be claimed once, so the alternate encoding grants nothing new.

use super::errors::AuthFailure;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use sha2::{Digest, Sha256};
use tracing::debug;

/// SHA-256 digest.
pub type Hash = [u8; 32];

/// ECDSA signature verifier.
#[derive(Debug, Clone, Default)]
pub struct EcdsaVerifier;

impl EcdsaVerifier {
    /// Create a new ECDSA verifier.
    pub fn new() -> Self {
        Self
    }

    /// Verify a DER signature over `message` for the given SEC1 public key.
    pub fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        message: &str,
    ) -> Result<(), AuthFailure> {
        verify(public_key, signature, message)
    }
}

/// Verify a DER signature over `message` for the given SEC1 public key.
pub fn verify(public_key: &[u8], signature: &[u8], message: &str) -> Result<(), AuthFailure> {
    let verifying_key =
        VerifyingKey::from_sec1_bytes(public_key).map_err(|_| AuthFailure::InvalidKey)?;

    let signature = Signature::from_der(signature).map_err(|_| AuthFailure::InvalidSignature)?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let digest = sha256(message.as_bytes());
    debug!(digest = %hex::encode(digest), "verifying registrant signature");

    verifying_key
        .verify_prehash(&digest, &signature)
        .map_err(|_| AuthFailure::BadSignature)
}

/// SHA-256 of arbitrary bytes.
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

// =============================================================================
// TEST HELPERS
// =============================================================================
