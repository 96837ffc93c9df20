//! # Domain Layer
//!
//! Pure registry logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod codec;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod keyspace;
pub mod messages;
pub mod projections;
pub mod write_set;
