//! Request and response bodies of the `/api/v1/cord` routes.
//!
//! Bodies arrive loosely shaped: fields may be missing, `product` may be an
//! object or a JSON-encoded string, prices may be strings or numbers. Each
//! body converts into a typed workflow request before anything is anchored.

use cc_04_catalog_service::{AnchorOutcome, ListingOutcome, ListingRequest, OrderRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{BlockHash, Price, ProductItem};

use super::error::ApiError;

/// `product` as sent by clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductPayload {
    /// JSON text, as the original form-style clients send it
    Encoded(String),
    Item(ProductItem),
}

impl ProductPayload {
    /// Decode into a product. An empty string counts as missing.
    pub fn into_item(self) -> Result<ProductItem, ApiError> {
        match self {
            ProductPayload::Item(item) => Ok(item),
            ProductPayload::Encoded(text) if text.trim().is_empty() => {
                Err(ApiError::required_field("product"))
            }
            ProductPayload::Encoded(text) => serde_json::from_str(&text)
                .map_err(|e| ApiError::bad_request(format!("product is not a JSON object: {e}"))),
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::required_field(field))
}

fn required_product(product: Option<ProductPayload>) -> Result<ProductItem, ApiError> {
    product
        .ok_or_else(|| ApiError::required_field("product"))?
        .into_item()
}

fn optional_price(value: Option<Value>) -> Result<Option<Price>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(Price::from_json(&v)?)),
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// `POST /item_create`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemCreateBody {
    pub identifier: Option<String>,
    pub product: Option<ProductPayload>,
}

impl ItemCreateBody {
    /// The product and, when given, the seller URI that creates it.
    pub fn into_parts(self) -> Result<(ProductItem, Option<String>), ApiError> {
        let product = required_product(self.product)?;
        let creator = self.identifier.filter(|v| !v.trim().is_empty());
        Ok((product, creator))
    }
}

/// `POST /item_delegate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDelegateBody {
    pub identifier: Option<String>,
}

impl ItemDelegateBody {
    pub fn into_seller_uri(self) -> Result<String, ApiError> {
        required(self.identifier, "identifier")
    }
}

/// `POST /item_add`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemAddBody {
    pub identifier: Option<String>,
    pub product: Option<ProductPayload>,
    pub seller_name: Option<String>,
    pub selling_price: Option<Value>,
}

impl ItemAddBody {
    pub fn into_request(self) -> Result<ListingRequest, ApiError> {
        let seller = required(self.identifier, "identifier")?;
        let product = required_product(self.product)?;

        let mut request = ListingRequest::new(product).by_seller(seller);
        if let Some(name) = self.seller_name.filter(|n| !n.trim().is_empty()) {
            request = request.in_store(name);
        }
        if let Some(price) = optional_price(self.selling_price)? {
            request = request.at_price(price);
        }
        Ok(request)
    }
}

/// `POST /order_confirm`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderConfirmBody {
    pub identifier: Option<String>,
    #[serde(rename = "listId")]
    pub list_id: Option<String>,
    #[serde(rename = "blockHash")]
    pub block_hash: Option<String>,
    pub order_price: Option<Value>,
}

impl OrderConfirmBody {
    pub fn into_request(self) -> Result<OrderRequest, ApiError> {
        let buyer_uri = required(self.identifier, "identifier")?;
        let listing_id = required(self.list_id, "listId")?;
        let block_hash: BlockHash = required(self.block_hash, "blockHash")?.trim().parse()?;
        Ok(OrderRequest {
            buyer_uri,
            listing_id,
            block_hash,
            order_price: optional_price(self.order_price)?,
        })
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Answer of `item_create`, `item_delegate` and `order_confirm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorResponse {
    pub success: bool,
    pub id: String,
    pub block: BlockHash,
}

impl From<AnchorOutcome> for AnchorResponse {
    fn from(outcome: AnchorOutcome) -> Self {
        Self {
            success: true,
            id: outcome.id,
            block: outcome.block_hash,
        }
    }
}

/// Answer of `item_add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub success: bool,
    pub product_list_id: String,
    #[serde(rename = "blockHash")]
    pub block_hash: BlockHash,
}

impl From<ListingOutcome> for ListingResponse {
    fn from(outcome: ListingOutcome) -> Self {
        Self {
            success: true,
            product_list_id: outcome.listing_id,
            block_hash: outcome.block_hash,
        }
    }
}
