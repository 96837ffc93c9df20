//! # Inbound Ports (Driving Ports / API)
//!
//! The registry's three write transitions, three read projections, and the
//! one-time bootstrap. The ledger is passed into every call; implementations
//! hold no ledger state between calls.

use crate::domain::entities::{RegisterIdentityTx, RegisterSpecTx, RegisterThingTx};
use crate::domain::errors::RegistryError;
use crate::domain::projections::{OwnerView, SpecView, ThingView};
use crate::domain::write_set::WriteSet;
use crate::ports::outbound::LedgerStore;

/// Primary registry API.
///
/// Every write either returns the exact puts it applied or a single typed
/// error. No write is applied unless every check of the transaction passed.
pub trait RegistryApi {
    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Write SHA-256(`seed`) under the counter seed key.
    fn initialize(&self, ledger: &mut dyn LedgerStore, seed: &str)
        -> Result<WriteSet, RegistryError>;

    /// Whether a counter seed has been written.
    fn is_initialized(&self, ledger: &dyn LedgerStore) -> Result<bool, RegistryError>;

    // =========================================================================
    // Write Transitions
    // =========================================================================

    /// Claim an owner name for a self-asserted public key.
    ///
    /// # Errors
    /// * `NameConflict` - The name is already registered
    /// * `AuthFailure` - The signature does not verify for the presented key
    fn register_identity(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterIdentityTx,
    ) -> Result<WriteSet, RegistryError>;

    /// Register a thing and its aliases under an existing owner.
    ///
    /// # Errors
    /// * `NameConflict` - Nonce probe hit, or an alias is a registered owner name
    /// * `UnknownOwner` - The owner has not been registered
    /// * `AuthFailure` - The signature does not verify for the owner's key
    fn register_thing(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterThingTx,
    ) -> Result<WriteSet, RegistryError>;

    /// Register a spec under an existing owner.
    ///
    /// # Errors
    /// * `NameConflict` - The spec name is already registered
    /// * `UnknownOwner` - The owner has not been registered
    /// * `AuthFailure` - The signature does not verify for the owner's key
    fn register_spec(
        &self,
        ledger: &mut dyn LedgerStore,
        tx: &RegisterSpecTx,
    ) -> Result<WriteSet, RegistryError>;

    // =========================================================================
    // Read Projections
    // =========================================================================

    fn get_owner(&self, ledger: &dyn LedgerStore, name: &str) -> Result<OwnerView, RegistryError>;

    /// Look a thing up by hex nonce, falling back to alias.
    fn get_thing(
        &self,
        ledger: &dyn LedgerStore,
        identifier: &str,
    ) -> Result<ThingView, RegistryError>;

    fn get_spec(&self, ledger: &dyn LedgerStore, spec_name: &str)
        -> Result<SpecView, RegistryError>;
}
