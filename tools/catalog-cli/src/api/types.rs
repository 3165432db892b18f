//! Wire shapes of the gateway routes, as seen from the client side.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /item_add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemAddRequest {
    pub identifier: String,
    pub product: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<Value>,
}

/// Body of `POST /order_confirm`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmRequest {
    pub identifier: String,
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(rename = "blockHash")]
    pub block_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price: Option<Value>,
}

/// Answer of `item_add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingReply {
    pub success: bool,
    pub product_list_id: String,
    #[serde(rename = "blockHash")]
    pub block_hash: String,
}

/// Answer of `order_confirm` and the other anchoring routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorReply {
    pub success: bool,
    pub id: String,
    pub block: String,
}

/// Error body returned with every non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: String,
}
