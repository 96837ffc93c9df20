//! # IoT Registry Test Suite
//!
//! Unified test crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Reference registrants and transaction builders
//! └── integration/      # Cross-crate flows
//!     ├── reference_vectors.rs
//!     ├── keyspace_quirks.rs
//!     ├── authorization.rs
//!     └── node_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # Including the RocksDB-backed node flows
//! cargo test -p registry-tests --features rocksdb
//! ```

pub mod integration;
