//! # Node Configuration
//!
//! Layered configuration for the `catalog-node` process:
//!
//! 1. Built-in defaults
//! 2. Optional JSON file named by `CATALOG_CONFIG`
//! 3. Environment overrides (`PORT`, `CATALOG_*`)

use cc_05_api_gateway::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "CATALOG_CONFIG";

/// Complete node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// HTTP gateway and catalog settings.
    pub gateway: GatewayConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum NodeConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] cc_05_api_gateway::ConfigError),
}

impl NodeConfig {
    /// Read a JSON config file. Missing sections take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, NodeConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| NodeConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| NodeConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the file named by `CATALOG_CONFIG`, then environment
    /// overrides. The result is validated.
    pub fn load() -> Result<Self, NodeConfigError> {
        let base = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` and validate.
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self, NodeConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = self.gateway.apply_overrides(lookup)?;
        gateway.validate()?;
        Ok(Self { gateway })
    }
}
