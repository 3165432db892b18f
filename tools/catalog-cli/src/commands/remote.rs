//! `catalog remote ...`: drive a running gateway over HTTP.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;
use shared_types::Block;
use tracing::debug;

use super::{read_input, CommandError, Output};
use crate::api::{AnchorReply, GatewayClient, ItemAddRequest, ListingReply, OrderConfirmRequest};

#[derive(Subcommand, Debug, Clone)]
pub enum RemoteCommand {
    /// Register a listing (`POST /item_add`)
    ItemAdd(ItemAddArgs),
    /// Order against a listing (`POST /order_confirm`)
    OrderConfirm(OrderConfirmArgs),
    /// Fetch a block (`GET /block/:hash`)
    Block(BlockArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EndpointArgs {
    /// Gateway root URL
    #[arg(long, env = "CATALOG_ENDPOINT", default_value = "http://127.0.0.1:4001")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
}

impl EndpointArgs {
    fn client(&self) -> Result<GatewayClient, CommandError> {
        Ok(GatewayClient::new(
            &self.endpoint,
            Duration::from_secs(self.timeout),
        )?)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ItemAddArgs {
    #[command(flatten)]
    pub gateway: EndpointArgs,

    /// Seller key URI
    #[arg(long)]
    pub identifier: String,

    /// Product JSON file, or `-` for stdin
    #[arg(long)]
    pub product: PathBuf,

    #[arg(long)]
    pub seller_name: Option<String>,

    #[arg(long)]
    pub selling_price: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OrderConfirmArgs {
    #[command(flatten)]
    pub gateway: EndpointArgs,

    /// Buyer key URI
    #[arg(long)]
    pub identifier: String,

    #[arg(long)]
    pub list_id: String,

    #[arg(long)]
    pub block_hash: String,

    #[arg(long)]
    pub order_price: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct BlockArgs {
    #[command(flatten)]
    pub gateway: EndpointArgs,

    /// `0x`-prefixed block hash
    pub hash: String,
}

impl fmt::Display for ListingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "listing: {}", self.product_list_id)?;
        write!(f, "block:   {}", self.block_hash)
    }
}

impl fmt::Display for AnchorReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id:    {}", self.id)?;
        write!(f, "block: {}", self.block)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BlockView(pub Block);

impl fmt::Display for BlockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = &self.0;
        writeln!(f, "block #{} {}", block.number, block.hash)?;
        write!(f, "parent    {}", block.parent_hash)?;
        for (index, extrinsic) in block.extrinsics.iter().enumerate() {
            write!(f, "\n  [{index}] {}", extrinsic.call_name())?;
            if let Some(id) = extrinsic.arg_text(0) {
                write!(f, " {id}")?;
            }
        }
        Ok(())
    }
}

fn price_arg(price: Option<String>) -> Option<Value> {
    price.map(Value::String)
}

pub async fn run(command: RemoteCommand) -> Result<Output, CommandError> {
    match command {
        RemoteCommand::ItemAdd(args) => {
            let client = args.gateway.client()?;
            let product: Value = serde_json::from_str(&read_input(&args.product)?)?;
            let request = ItemAddRequest {
                identifier: args.identifier,
                product,
                seller_name: args.seller_name,
                selling_price: price_arg(args.selling_price),
            };
            debug!(endpoint = client.endpoint(), "item_add");
            Output::of(&client.item_add(&request).await?)
        }
        RemoteCommand::OrderConfirm(args) => {
            let client = args.gateway.client()?;
            let request = OrderConfirmRequest {
                identifier: args.identifier,
                list_id: args.list_id,
                block_hash: args.block_hash,
                order_price: price_arg(args.order_price),
            };
            debug!(endpoint = client.endpoint(), "order_confirm");
            Output::of(&client.order_confirm(&request).await?)
        }
        RemoteCommand::Block(args) => {
            let client = args.gateway.client()?;
            debug!(endpoint = client.endpoint(), hash = %args.hash, "block");
            Output::of(&BlockView(client.block(&args.hash).await?))
        }
    }
}
