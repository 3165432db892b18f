//! Command line definition.

use clap::{Parser, Subcommand};

use crate::commands::address::AddressArgs;
use crate::commands::bench::BenchArgs;
use crate::commands::demo::DemoArgs;
use crate::commands::find_listing::FindListingArgs;
use crate::commands::remote::RemoteCommand;

/// Catalog-Anchor command line
#[derive(Parser, Debug)]
#[command(name = "catalog", version)]
#[command(about = "Content addresses, block scans, demo flows and a gateway client")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive the content address of a JSON payload
    Address(AddressArgs),
    /// Locate a listing registration in a block
    FindListing(FindListingArgs),
    /// Run the marketplace flow on an in-memory ledger
    Demo(DemoArgs),
    /// Measure batch anchoring throughput
    Bench(BenchArgs),
    /// Talk to a running gateway
    #[command(subcommand)]
    Remote(RemoteCommand),
}
