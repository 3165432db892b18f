//! Catalog configuration with validation.

use cc_02_listing_matcher::MatchPolicy;
use cc_03_ledger_client::Identity;
use serde::{Deserialize, Serialize};
use shared_types::SchemaDefinition;

use super::errors::ConfigError;

/// Roles, defaults and scan policy of a catalog context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Signs listing registrations
    pub network_author_uri: String,
    /// Owns the schema and anchors products
    pub product_owner_uri: String,
    /// Seller used when a request carries no identifier
    pub default_seller_uri: String,
    /// Store name used when a listing request omits `seller_name`
    pub default_seller_name: String,
    /// Product name used when a product omits `name`
    pub default_item_name: String,
    /// How duplicate registrations in a block are resolved
    pub match_policy: MatchPolicy,
    /// Schema anchored on first use
    pub schema: SchemaDefinition,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            network_author_uri: "//Alice".to_string(),
            product_owner_uri: "//Bob".to_string(),
            default_seller_uri: "//seller//default".to_string(),
            default_seller_name: "Default Seller".to_string(),
            default_item_name: "Default Item".to_string(),
            match_policy: MatchPolicy::default(),
            schema: SchemaDefinition::ondc_product(),
        }
    }
}

impl CatalogConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (role, uri) in [
            ("network author", &self.network_author_uri),
            ("product owner", &self.product_owner_uri),
            ("default seller", &self.default_seller_uri),
        ] {
            Identity::from_uri(uri).map_err(|source| ConfigError::InvalidUri { role, source })?;
        }

        if self.default_seller_name.trim().is_empty() {
            return Err(ConfigError::Empty("default_seller_name"));
        }
        if self.default_item_name.trim().is_empty() {
            return Err(ConfigError::Empty("default_item_name"));
        }
        if self.schema.name.trim().is_empty() {
            return Err(ConfigError::Empty("schema.name"));
        }

        Ok(())
    }
}
