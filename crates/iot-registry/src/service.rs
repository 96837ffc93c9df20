//! # Registry Service
//!
//! Application service layer that implements the `RegistryApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RegistryApi`)
//! - Reads and writes through the outbound port (`LedgerStore`) passed into each call
//! - Delegates key building, message building and ECDSA to the domain layer
//!
//! ## Transaction Discipline
//!
//! Every write transition runs its reads and its signature check first, then
//! stages its puts in a `WriteSet`, then applies them in order. A transition
//! never reads back its own puts. Alias uniqueness is checked once, before any
//! put, and not re-checked while aliases are written.

use crate::domain::codec::{decode_record, encode_record};
use crate::domain::ecdsa::{sha256, EcdsaVerifier};
use crate::domain::entities::{
    AliasRecord, Identity, RegisterIdentityTx, RegisterSpecTx, RegisterThingTx, Spec, Thing,
};
use crate::domain::errors::{ConflictKind, RecordKind, RegistryError};
use crate::domain::keyspace;
use crate::domain::messages::CanonicalMessage;
use crate::domain::projections::{OwnerView, SpecView, ThingView};
use crate::domain::write_set::WriteSet;
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::LedgerStore;
use tracing::{debug, info, warn};

/// Registry state machine.
///
/// Stateless apart from its verifier: all state lives in the ledger handed to
/// each call.
#[derive(Debug, Clone, Default)]
pub struct RegistryService {
    verifier: EcdsaVerifier,
}

impl RegistryService {
    pub fn new() -> Self {
        Self {
            verifier: EcdsaVerifier::new(),
        }
    }

    /// Verify the transaction's signature against `public_key`.
    fn authenticate<T: CanonicalMessage>(
        &self,
        public_key: &[u8],
        signature: &[u8],
        tx: &T,
    ) -> Result<(), RegistryError> {
        let message = tx.canonical_message();
        debug!(message = %message, "checking signature");
        self.verifier
            .verify(public_key, signature, &message)
            .map_err(RegistryError::from)
    }

    /// Load the owner identity a thing/spec transaction names.
    fn load_owner(
        &self,
        ledger: &dyn LedgerStore,
        owner_name: &str,
    ) -> Result<Identity, RegistryError> {
        let owner_bytes = read(ledger, &keyspace::owner_key(owner_name))?.ok_or_else(|| {
            RegistryError::UnknownOwner {
                name: owner_name.to_string(),
            }
        })?;
        decode_record(&owner_bytes)
    }

    fn try_register_identity(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterIdentityTx,
    ) -> Result<WriteSet, RegistryError> {
        let key = keyspace::owner_key(&tx.owner_name);
        if read(ledger, &key)?.is_some() {
            return Err(RegistryError::NameConflict {
                kind: ConflictKind::OwnerName,
                name: tx.owner_name.clone(),
            });
        }

        // Trust on first use: the presented key is the authority for this name.
        self.authenticate(&tx.public_key, &tx.signature, tx)?;

        let mut writes = WriteSet::new();
        writes.put(key, encode_record(&Identity::from(tx))?);
        writes.apply(ledger)?;
        Ok(writes)
    }

    fn try_register_thing(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterThingTx,
    ) -> Result<WriteSet, RegistryError> {
        // Probes `Nonce: <hex>`, which nothing writes. See domain/keyspace.rs.
        if read(ledger, &keyspace::nonce_key(&tx.nonce))?.is_some() {
            return Err(RegistryError::NameConflict {
                kind: ConflictKind::Nonce,
                name: hex::encode(&tx.nonce),
            });
        }

        let owner_key = keyspace::owner_key(&tx.owner_name);
        let owner_bytes =
            read(ledger, &owner_key)?.ok_or_else(|| RegistryError::UnknownOwner {
                name: tx.owner_name.clone(),
            })?;

        for alias in &tx.aliases {
            if read(ledger, &keyspace::owner_key(alias))?.is_some() {
                return Err(RegistryError::NameConflict {
                    kind: ConflictKind::Alias,
                    name: alias.clone(),
                });
            }
        }

        let owner: Identity = decode_record(&owner_bytes)?;
        self.authenticate(&owner.public_key, &tx.signature, tx)?;

        let alias_record = encode_record(&AliasRecord {
            nonce: tx.nonce.clone(),
        })?;

        let mut writes = WriteSet::new();
        for alias in &tx.aliases {
            writes.put(keyspace::alias_key(alias), alias_record.clone());
        }
        writes.put(
            keyspace::thing_key(&tx.nonce),
            encode_record(&Thing::from(tx))?,
        );
        writes.apply(ledger)?;
        Ok(writes)
    }

    fn try_register_spec(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterSpecTx,
    ) -> Result<WriteSet, RegistryError> {
        let key = keyspace::spec_key(&tx.spec_name);
        if read(ledger, &key)?.is_some() {
            return Err(RegistryError::NameConflict {
                kind: ConflictKind::Spec,
                name: tx.spec_name.clone(),
            });
        }

        let owner = self.load_owner(ledger, &tx.owner_name)?;
        self.authenticate(&owner.public_key, &tx.signature, tx)?;

        let mut writes = WriteSet::new();
        writes.put(key, encode_record(&Spec::from(tx))?);
        writes.apply(ledger)?;
        Ok(writes)
    }
}

impl RegistryApi for RegistryService {
    fn initialize(
        &self,
        ledger: &mut dyn LedgerStore,
        seed: &str,
    ) -> Result<WriteSet, RegistryError> {
        let mut writes = WriteSet::new();
        writes.put(keyspace::COUNTER_SEED_KEY, sha256(seed.as_bytes()).to_vec());
        writes.apply(ledger)?;
        info!("Counter seed initialized");
        Ok(writes)
    }

    fn is_initialized(&self, ledger: &dyn LedgerStore) -> Result<bool, RegistryError> {
        Ok(read(ledger, keyspace::COUNTER_SEED_KEY)?.is_some())
    }

    fn register_identity(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterIdentityTx,
    ) -> Result<WriteSet, RegistryError> {
        let result = self.try_register_identity(ledger, tx);
        match &result {
            Ok(_) => info!(owner = %tx.owner_name, "Owner registered"),
            Err(e) => warn!(owner = %tx.owner_name, error = %e, "registerOwner rejected"),
        }
        result
    }

    fn register_thing(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterThingTx,
    ) -> Result<WriteSet, RegistryError> {
        let nonce = hex::encode(&tx.nonce);
        let result = self.try_register_thing(ledger, tx);
        match &result {
            Ok(writes) => info!(
                nonce = %nonce,
                owner = %tx.owner_name,
                aliases = tx.aliases.len(),
                writes = writes.len(),
                "Thing registered"
            ),
            Err(e) => warn!(nonce = %nonce, owner = %tx.owner_name, error = %e, "registerThing rejected"),
        }
        result
    }

    fn register_spec(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterSpecTx,
    ) -> Result<WriteSet, RegistryError> {
        let result = self.try_register_spec(ledger, tx);
        match &result {
            Ok(_) => info!(spec = %tx.spec_name, owner = %tx.owner_name, "Spec registered"),
            Err(e) => warn!(spec = %tx.spec_name, error = %e, "registerSpec rejected"),
        }
        result
    }

    fn get_owner(&self, ledger: &dyn LedgerStore, name: &str) -> Result<OwnerView, RegistryError> {
        let bytes = read(ledger, &keyspace::owner_key(name))?.ok_or_else(|| {
            RegistryError::NotFound {
                kind: RecordKind::Owner,
                key: name.to_string(),
            }
        })?;
        let identity: Identity = decode_record(&bytes)?;
        Ok(OwnerView::from_record(&identity))
    }

    fn get_thing(
        &self,
        ledger: &dyn LedgerStore,
        identifier: &str,
    ) -> Result<ThingView, RegistryError> {
        if let Some(bytes) = read(ledger, &keyspace::thing_key_from_hex(identifier))? {
            let thing: Thing = decode_record(&bytes)?;
            return Ok(ThingView::from_record(identifier, &thing));
        }

        let not_found = || RegistryError::NotFound {
            kind: RecordKind::Thing,
            key: identifier.to_string(),
        };

        let alias_bytes = read(ledger, &keyspace::alias_key(identifier))?.ok_or_else(not_found)?;
        let alias: AliasRecord = decode_record(&alias_bytes)?;
        let nonce_hex = hex::encode(&alias.nonce);
        debug!(alias = identifier, nonce = %nonce_hex, "resolved alias");

        let bytes =
            read(ledger, &keyspace::thing_key_from_hex(&nonce_hex))?.ok_or_else(not_found)?;
        let thing: Thing = decode_record(&bytes)?;
        Ok(ThingView::from_record(&nonce_hex, &thing))
    }

    fn get_spec(
        &self,
        ledger: &dyn LedgerStore,
        spec_name: &str,
    ) -> Result<SpecView, RegistryError> {
        let bytes = read(ledger, &keyspace::spec_key(spec_name))?.ok_or_else(|| {
            RegistryError::NotFound {
                kind: RecordKind::Spec,
                key: spec_name.to_string(),
            }
        })?;
        let spec: Spec = decode_record(&bytes)?;
        Ok(SpecView::from_record(spec_name, &spec))
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Read a key, treating an empty value as absent.
fn read(ledger: &dyn LedgerStore, key: &str) -> Result<Option<Vec<u8>>, RegistryError> {
    debug!(key, "ledger read");
    let value = ledger
        .get(key)
        .map_err(|source| RegistryError::storage(key, 0, source))?;
    Ok(value.filter(|bytes| !bytes.is_empty()))
}
