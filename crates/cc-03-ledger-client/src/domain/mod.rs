//! # Domain Layer
//!
//! Calls, signatures and receipts. Hashing and signing only; no I/O.

pub mod call;
pub mod errors;
pub mod identity;

pub use call::*;
pub use errors::*;
pub use identity::*;
