//! # Node Runtime
//!
//! Bootstraps the ledger and serves registry commands, one per line.
//!
//! ## Line Protocol
//!
//! ```text
//! init <seed>                 -> ok
//! registerOwner <hex record>  -> ok
//! registerThing <hex record>  -> ok
//! registerSpec <hex record>   -> ok
//! owner <name>                -> {"OwnerName":...,"Pubkey":...}
//! thing <nonce hex | alias>   -> {"Nonce":...,"Aliases":[...],...}
//! spec <spec name>            -> {"SpecName":...,"OwnerName":...,"Data":...}
//! ```
//!
//! Everything after the first whitespace is the single argument, so spec
//! names may contain spaces. Failures print `error: <message>` and the loop
//! continues. Blank lines and lines starting with `#` are skipped.

use crate::storage::LedgerBackend;
use iot_registry::{CommandDispatcher, LedgerStore, QueryCommand, RegistryApi, RegistryError};
use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Outcome of one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Write applied
    Ok,
    /// Query projection
    Json(String),
    /// Rejected command
    Error(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("ok"),
            Response::Json(json) => f.write_str(json),
            Response::Error(message) => write!(f, "error: {message}"),
        }
    }
}

impl From<Result<(), RegistryError>> for Response {
    fn from(result: Result<(), RegistryError>) -> Self {
        match result {
            Ok(()) => Response::Ok,
            Err(e) => Response::Error(e.to_string()),
        }
    }
}

/// The node: a dispatcher bound to one ledger.
pub struct NodeRuntime<L: LedgerStore = LedgerBackend> {
    dispatcher: CommandDispatcher,
    ledger: L,
}

impl<L: LedgerStore> NodeRuntime<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(),
            ledger,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Write the counter seed unless one is already present.
    ///
    /// Returns `true` if the seed was written.
    pub fn bootstrap(&mut self, seed: &str) -> Result<bool, RegistryError> {
        if self.dispatcher.registry().is_initialized(&self.ledger)? {
            info!("Ledger already initialized, keeping existing counter seed");
            return Ok(false);
        }
        self.dispatcher.init(&mut self.ledger, &[seed])?;
        Ok(true)
    }

    /// Execute one command line. `None` for lines that carry no command.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = if argument.is_empty() {
            Vec::new()
        } else {
            vec![argument]
        };
        debug!(command, "handling command");

        let response: Response = if command == "init" {
            self.dispatcher
                .init(&mut self.ledger, &args)
                .map(|_| ())
                .into()
        } else if QueryCommand::parse(command).is_some() {
            match self.dispatcher.query(&self.ledger, command, &args) {
                Ok(json) => Response::Json(String::from_utf8_lossy(&json).into_owned()),
                Err(e) => Response::Error(e.to_string()),
            }
        } else {
            self.dispatcher
                .invoke(&mut self.ledger, command, &args)
                .map(|_| ())
                .into()
        };
        Some(response)
    }

    /// Serve lines from `reader` until EOF, writing one response line each.
    ///
    /// Returns the number of commands handled.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0;

        while let Some(line) = lines.next_line().await? {
            if let Some(response) = self.handle_line(&line) {
                writer.write_all(format!("{response}\n").as_bytes()).await?;
                writer.flush().await?;
                handled += 1;
            }
        }

        info!(handled, "Input closed");
        Ok(handled)
    }
}
