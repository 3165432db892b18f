//! # Adapters Layer
//!
//! Implementations of the outbound ledger port.

mod memory;

pub use memory::InMemoryLedger;
