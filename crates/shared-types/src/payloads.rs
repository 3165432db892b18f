//! # Catalog Payloads
//!
//! Typed structures for everything the catalog anchors: schemas, products,
//! listings and orders. Each anchored payload is wrapped in a
//! [`ContentStream`] before its content address is derived.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull, DeserializeFromStr, SerializeDisplay};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::entities::{AccountAddress, BlockHash};
use crate::errors::PayloadError;

// =============================================================================
// PRICE
// =============================================================================

/// A price in the smallest currency unit.
///
/// Serialized as a decimal string so values above 2^53 survive JSON clients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Price(pub u128);

impl Price {
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Read a price from a JSON value: a decimal string or a non-negative
    /// integer number.
    pub fn from_json(value: &Value) -> Result<Self, PayloadError> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n.as_u64().map(|v| Price(u128::from(v))).ok_or_else(|| {
                PayloadError::InvalidPrice {
                    value: n.to_string(),
                    reason: "not a non-negative integer",
                }
            }),
            other => Err(PayloadError::InvalidPrice {
                value: other.to_string(),
                reason: "expected a string or a number",
            }),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PayloadError;

    /// Strict base-10: ASCII digits only, no sign, no whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| PayloadError::InvalidPrice {
            value: s.to_string(),
            reason,
        };
        if s.is_empty() {
            return Err(invalid("empty"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a base-10 integer"));
        }
        s.parse::<u128>().map(Price).map_err(|_| invalid("out of range"))
    }
}

impl From<u128> for Price {
    fn from(value: u128) -> Self {
        Price(value)
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

/// Declared type of a schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    #[serde(rename = "type")]
    pub kind: String,
}

impl PropertyType {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }
}

/// A product schema anchored once per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyType>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl SchemaDefinition {
    /// The ONDC retail product schema.
    pub fn ondc_product() -> Self {
        let properties = [
            ("name", "string"),
            ("description", "string"),
            ("sku", "string"),
            ("category", "string"),
            ("price", "string"),
            ("quantity", "integer"),
            ("image", "string"),
        ]
        .into_iter()
        .map(|(k, t)| (k.to_string(), PropertyType::new(t)))
        .collect();

        Self {
            name: "ONDC Product".to_string(),
            description: "Retail catalog item published on the ONDC network".to_string(),
            properties,
            required: vec!["name".to_string()],
        }
    }

    /// Check that every required field is present on the product.
    pub fn check(&self, product: &ProductItem) -> Result<(), PayloadError> {
        for field in &self.required {
            let present = match field.as_str() {
                "name" => !product.name.is_empty(),
                other => product.attributes.contains_key(other),
            };
            if !present {
                return Err(PayloadError::MissingField {
                    schema: self.name.clone(),
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A catalog item. `name` is the only fixed field; everything else is kept
/// as free-form attributes. A missing or `null` name reads as empty.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: &str, value: Value) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    /// Fill in `name` when the caller left it empty.
    pub fn with_default_name(mut self, default: &str) -> Self {
        if self.name.trim().is_empty() {
            self.name = default.to_string();
        }
        self
    }

    /// The product's own `price` attribute, if any.
    pub fn price(&self) -> Result<Option<Price>, PayloadError> {
        match self.attributes.get("price") {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Price::from_json(value).map(Some),
        }
    }
}

// =============================================================================
// ANCHORED ENVELOPES
// =============================================================================

/// Content wrapped with its creator and optional schema and link before
/// anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStream<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    pub contents: T,
    pub creator: AccountAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl<T> ContentStream<T> {
    pub fn new(contents: T, creator: AccountAddress) -> Self {
        Self {
            schema_id: None,
            contents,
            creator,
            link: None,
        }
    }

    pub fn under_schema(mut self, schema_id: impl Into<String>) -> Self {
        self.schema_id = Some(schema_id.into());
        self
    }

    pub fn linked_to(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Store identity: a seller's storefront name bound to their account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDescriptor {
    pub store: String,
    pub seller: AccountAddress,
}

/// Order placed against an anchored listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub listing_id: String,
    pub buyer: AccountAddress,
    pub seller: AccountAddress,
    pub store_id: String,
    pub price: Price,
    pub listing_address: String,
    pub listing_block: BlockHash,
}

/// Kinds of anchored entity; the tag is mixed into entity ids so a product
/// and a listing over the same bytes never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Schema,
    Product,
    Listing,
    Order,
    Stream,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Schema => "schema",
            EntityKind::Product => "product",
            EntityKind::Listing => "listing",
            EntityKind::Order => "order",
            EntityKind::Stream => "stream",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
