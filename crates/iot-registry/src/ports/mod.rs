//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: Registry API that the dispatcher and hosts use
//! - **Outbound (Driven)**: The ledger store this crate needs

pub mod inbound;
pub mod outbound;
