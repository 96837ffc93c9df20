//! # Integration Tests
//!
//! Flows across the registry core and the node runtime.

pub mod authorization;
pub mod keyspace_quirks;
