//! Gateway configuration with validation.

use cc_02_listing_matcher::MatchPolicy;
use cc_04_catalog_service::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Request size limits
    pub limits: LimitsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Catalog roles and defaults
    pub catalog: CatalogConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.timeouts.read.is_zero() {
            return Err(ConfigError::InvalidTimeout("read timeout cannot be 0".into()));
        }
        if self.timeouts.anchor.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "anchor timeout cannot be 0".into(),
            ));
        }

        self.catalog.validate()?;
        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Apply process environment overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// | variable | field |
    /// |---|---|
    /// | `PORT` | `http.port` |
    /// | `CATALOG_HTTP_HOST` | `http.host` |
    /// | `CATALOG_NETWORK_AUTHOR_URI` | `catalog.network_author_uri` |
    /// | `CATALOG_PRODUCT_OWNER_URI` | `catalog.product_owner_uri` |
    /// | `CATALOG_DEFAULT_SELLER_URI` | `catalog.default_seller_uri` |
    /// | `CATALOG_MATCH_POLICY` | `catalog.match_policy` |
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT={port} is not a port number")))?;
        }
        if let Some(host) = lookup("CATALOG_HTTP_HOST") {
            self.http.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("CATALOG_HTTP_HOST={host} is not an IP")))?;
        }
        if let Some(uri) = lookup("CATALOG_NETWORK_AUTHOR_URI") {
            self.catalog.network_author_uri = uri;
        }
        if let Some(uri) = lookup("CATALOG_PRODUCT_OWNER_URI") {
            self.catalog.product_owner_uri = uri;
        }
        if let Some(uri) = lookup("CATALOG_DEFAULT_SELLER_URI") {
            self.catalog.default_seller_uri = uri;
        }
        if let Some(policy) = lookup("CATALOG_MATCH_POLICY") {
            self.catalog.match_policy = policy
                .parse::<MatchPolicy>()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(self)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 4001)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 4001,
        }
    }
}

/// Request limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 1MB)
    pub max_request_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 1024 * 1024,
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Block lookups, health and metrics
    #[serde(with = "humantime_serde")]
    pub read: Duration,
    /// Requests that submit to the ledger and wait for inclusion
    #[serde(with = "humantime_serde")]
    pub anchor: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(10),
            anchor: Duration::from_secs(60),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            max_age: 86400,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Invalid size limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    /// Invalid catalog section
    #[error(transparent)]
    Catalog(#[from] cc_04_catalog_service::ConfigError),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
