//! # Domain Layer
//!
//! Configuration, identifiers and the typed request/outcome shapes of the
//! catalog workflow.

pub mod config;
pub mod errors;
pub mod ids;
pub mod requests;

pub use config::*;
pub use errors::*;
pub use ids::*;
pub use requests::*;
