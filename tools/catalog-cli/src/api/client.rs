//! Gateway client over reqwest.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::Block;
use thiserror::Error;

use super::types::*;

/// Route prefix served by the gateway.
pub const API_BASE: &str = "/api/v1/cord";

/// Errors that can occur when talking to the gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("gateway answered {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for one gateway endpoint.
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// `endpoint` is the server root, e.g. `http://127.0.0.1:4001`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE, route)
    }

    /// Register a listing.
    pub async fn item_add(&self, request: &ItemAddRequest) -> Result<ListingReply, ClientError> {
        self.send(self.client.post(self.url("/item_add")).json(request))
            .await
    }

    /// Place an order against a listing.
    pub async fn order_confirm(
        &self,
        request: &OrderConfirmRequest,
    ) -> Result<AnchorReply, ClientError> {
        self.send(self.client.post(self.url("/order_confirm")).json(request))
            .await
    }

    /// Fetch a block by its `0x` hash.
    pub async fn block(&self, hash: &str) -> Result<Block, ClientError> {
        let route = format!("/block/{}", hash.trim());
        self.send(self.client.get(self.url(&route))).await
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ClientError> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        let body = response.bytes().await?;
        decode(status, &body)
    }
}

/// Turn a gateway answer into either the typed reply or an [`ClientError::Api`].
fn decode<R: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<R, ClientError> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(|e| ClientError::Parse(e.to_string()));
    }

    let message = serde_json::from_slice::<ErrorReply>(body)
        .map(|reply| reply.error)
        .unwrap_or_default();
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        message
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
