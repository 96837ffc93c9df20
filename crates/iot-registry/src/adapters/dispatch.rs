//! # Command Dispatcher
//!
//! Routes host commands to the registry service. Invoke arguments are hex
//! encoded transaction records; query arguments are plain strings and results
//! are JSON.

use crate::domain::codec::decode_hex_record;
use crate::domain::entities::{RegisterIdentityTx, RegisterSpecTx, RegisterThingTx};
use crate::domain::errors::RegistryError;
use crate::domain::write_set::WriteSet;
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::LedgerStore;
use crate::service::RegistryService;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Write commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeCommand {
    RegisterOwner,
    RegisterThing,
    RegisterSpec,
}

impl InvokeCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "registerOwner" => Some(Self::RegisterOwner),
            "registerThing" => Some(Self::RegisterThing),
            "registerSpec" => Some(Self::RegisterSpec),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterOwner => "registerOwner",
            Self::RegisterThing => "registerThing",
            Self::RegisterSpec => "registerSpec",
        }
    }
}

impl fmt::Display for InvokeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    Owner,
    Thing,
    Spec,
}

impl QueryCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "owner" => Some(Self::Owner),
            "thing" => Some(Self::Thing),
            "spec" => Some(Self::Spec),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Thing => "thing",
            Self::Spec => "spec",
        }
    }
}

impl fmt::Display for QueryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-facing entry point: `init`, `invoke` and `query`.
#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher<A: RegistryApi = RegistryService> {
    registry: A,
}

impl CommandDispatcher<RegistryService> {
    pub fn new() -> Self {
        Self::with_registry(RegistryService::new())
    }
}

impl<A: RegistryApi> CommandDispatcher<A> {
    pub fn with_registry(registry: A) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &A {
        &self.registry
    }

    /// Write the counter seed from `args[0]`. Re-running overwrites it.
    pub fn init(
        &self,
        ledger: &mut dyn LedgerStore,
        args: &[&str],
    ) -> Result<WriteSet, RegistryError> {
        let seed = args.first().ok_or_else(|| RegistryError::MissingArgument {
            command: "init".to_string(),
        })?;
        self.registry.initialize(ledger, seed)
    }

    /// Decode `args[0]` as the command's transaction record and apply it.
    pub fn invoke(
        &self,
        ledger: &mut dyn LedgerStore,
        command: &str,
        args: &[&str],
    ) -> Result<WriteSet, RegistryError> {
        let parsed = InvokeCommand::parse(command).ok_or_else(|| RegistryError::UnknownCommand {
            command: command.to_string(),
        })?;
        let argument = args.first().ok_or_else(|| RegistryError::MissingArgument {
            command: command.to_string(),
        })?;
        debug!(command, bytes = argument.len() / 2, "invoke");

        match parsed {
            InvokeCommand::RegisterOwner => {
                let tx: RegisterIdentityTx = decode_hex_record(argument)?;
                self.registry.register_identity(ledger, &tx)
            }
            InvokeCommand::RegisterThing => {
                let tx: RegisterThingTx = decode_hex_record(argument)?;
                self.registry.register_thing(ledger, &tx)
            }
            InvokeCommand::RegisterSpec => {
                let tx: RegisterSpecTx = decode_hex_record(argument)?;
                self.registry.register_spec(ledger, &tx)
            }
        }
    }

    /// Run a query and return its projection as JSON.
    pub fn query(
        &self,
        ledger: &dyn LedgerStore,
        command: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, RegistryError> {
        let parsed = QueryCommand::parse(command).ok_or_else(|| RegistryError::UnknownCommand {
            command: command.to_string(),
        })?;
        let [argument] = args else {
            return Err(RegistryError::MissingArgument {
                command: command.to_string(),
            });
        };

        match parsed {
            QueryCommand::Owner => to_json(&self.registry.get_owner(ledger, argument)?),
            QueryCommand::Thing => to_json(&self.registry.get_thing(ledger, argument)?),
            QueryCommand::Spec => to_json(&self.registry.get_spec(ledger, argument)?),
        }
    }
}

fn to_json<T: Serialize>(view: &T) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(view).map_err(RegistryError::malformed)
}
