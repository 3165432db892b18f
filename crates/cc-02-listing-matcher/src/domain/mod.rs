//! # Domain Layer
//!
//! Pure block scanning. No I/O.

pub mod entities;
pub mod errors;
pub mod matcher;

pub use entities::*;
pub use errors::*;
pub use matcher::*;
