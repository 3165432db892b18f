//! # Catalog CLI
//!
//! Offline tools over the two cores plus a client for a running gateway.
//!
//! ```text
//! catalog address <file|->             cc-01 content address
//! catalog find-listing --block --listing   cc-02 block scan
//! catalog demo                         full flow on InMemoryLedger
//! catalog bench --loop N               batch anchoring throughput
//! catalog remote item-add|order-confirm|block   HTTP → catalog-node
//! ```

pub mod api;
pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{execute, CommandError, Output};
