//! # Shared Types Crate
//!
//! Ledger entities and catalog payloads used across the workspace.
//!
//! ## Design Principles
//!
//! - **Read-only ledger data**: `Block` and `Extrinsic` are produced by a
//!   ledger client and never mutated by the catalog.
//! - **Typed payloads**: request bodies are turned into the structures in
//!   [`payloads`] at the boundary; nothing downstream handles opaque maps.
//! - **String-rendered hashes**: every hash crosses the wire as `0x`-prefixed
//!   lowercase hex.

pub mod entities;
pub mod errors;
pub mod payloads;

pub use entities::*;
pub use errors::*;
pub use payloads::*;
