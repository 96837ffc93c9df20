//! # Adapters Layer
//!
//! - `memory`: in-memory `LedgerStore` for tests and ephemeral nodes
//! - `dispatch`: routes command names and hex arguments to the registry

pub mod dispatch;
pub mod memory;
