//! # Ledger Client (cc-03)
//!
//! The stable request/response seam between the catalog and the ledger that
//! anchors it.
//!
//! ## Module Structure
//!
//! ```text
//! cc-03-ledger-client/
//! ├── domain/     # Call, SignedCall, Receipt, Identity, errors
//! ├── ports/      # LedgerClient (outbound, async)
//! └── adapters/   # InMemoryLedger
//! ```
//!
//! ## Submission Flow
//!
//! ```text
//! Call ──Identity::sign──→ SignedCall ──LedgerClient::submit──→ Receipt
//!                                              │
//!                                              ↓  (in-memory adapter)
//!                             verify ed25519 signature per call
//!                                              │
//!                                              ↓
//!                       Block { parent, number, extrinsics } appended
//! ```
//!
//! Signing and finality are opaque to callers: a receipt is returned once
//! the calls are in a block, and the block can be fetched back by hash.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryLedger;
pub use domain::{
    Call, Identity, IdentityError, LedgerError, Receipt, SignedCall, DEV_URI_PREFIX,
};
pub use ports::LedgerClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
