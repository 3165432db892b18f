//! Domain layer for the API Gateway.
//!
//! - `config`: server, limits, timeouts, CORS and catalog settings
//! - `error`: route errors and their HTTP mapping
//! - `types`: request and response bodies

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
