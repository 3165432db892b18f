//! Subcommand implementations.
//!
//! Every command returns a report that renders both as text and as JSON;
//! `main` picks the rendering.

pub mod address;
pub mod bench;
pub mod demo;
pub mod find_listing;
pub mod remote;

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use cc_01_content_address::EncodingError;
use cc_02_listing_matcher::MatchError;
use cc_04_catalog_service::CatalogError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::ClientError;
use crate::cli::Command;

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{0}")]
    Invalid(String),
}

/// A rendered command result.
#[derive(Debug, Clone)]
pub struct Output {
    pub text: String,
    pub json: Value,
}

impl Output {
    pub fn of<T: fmt::Display + Serialize>(report: &T) -> Result<Self, CommandError> {
        Ok(Self {
            text: report.to_string(),
            json: serde_json::to_value(report)?,
        })
    }

    pub fn render(&self, json: bool) -> String {
        if json {
            serde_json::to_string_pretty(&self.json).unwrap_or_else(|_| self.json.to_string())
        } else {
            self.text.clone()
        }
    }
}

/// Run a parsed subcommand.
pub async fn execute(command: Command) -> Result<Output, CommandError> {
    match command {
        Command::Address(args) => Output::of(&address::run(&args)?),
        Command::FindListing(args) => Output::of(&find_listing::run(&args)?),
        Command::Demo(args) => Output::of(&demo::run(&args).await?),
        Command::Bench(args) => Output::of(&bench::run(&args).await?),
        Command::Remote(command) => remote::run(command).await,
    }
}

/// Read a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CommandError> {
    let read_error = |source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}
