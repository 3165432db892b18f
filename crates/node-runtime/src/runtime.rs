//! # Node Runtime
//!
//! Wires the ledger adapter, the catalog context and the HTTP gateway.
//!
//! ```text
//! InMemoryLedger ──▶ CatalogContext ──▶ ApiGatewayService ──▶ :4001
//!   (LedgerClient)     (CatalogApi)
//! ```

use cc_03_ledger_client::{InMemoryLedger, LedgerClient};
use cc_04_catalog_service::{CatalogApi, CatalogContext};
use cc_05_api_gateway::{ApiGatewayService, GatewayError};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::NodeConfig;

/// The running node.
pub struct NodeRuntime {
    ledger: Arc<InMemoryLedger>,
    catalog: Arc<CatalogContext>,
    gateway: ApiGatewayService,
}

impl NodeRuntime {
    /// Build every component from configuration. Nothing is bound yet.
    pub fn new(config: NodeConfig) -> Result<Self, GatewayError> {
        let ledger = Arc::new(InMemoryLedger::new());
        let ledger_port: Arc<dyn LedgerClient> = ledger.clone();

        let catalog = Arc::new(CatalogContext::new(
            ledger_port,
            config.gateway.catalog.clone(),
        )?);
        info!(
            network_author = %catalog.network_author(),
            product_owner = %catalog.product_owner(),
            policy = %config.gateway.catalog.match_policy,
            "catalog context ready"
        );

        let catalog_port: Arc<dyn CatalogApi> = catalog.clone();
        let gateway = ApiGatewayService::new(config.gateway, catalog_port)?;

        Ok(Self {
            ledger,
            catalog,
            gateway,
        })
    }

    /// Start serving; returns the bound address.
    pub async fn start(&mut self) -> Result<SocketAddr, GatewayError> {
        info!("===========================================");
        info!("  Catalog Anchor Node v{}", crate::VERSION);
        info!("  Ledger: in-memory (genesis {})", self.ledger.genesis_hash());
        info!("===========================================");

        let addr = self.gateway.start().await?;
        info!("CORD API is running at http://{}{}", addr, cc_05_api_gateway::API_BASE);
        Ok(addr)
    }

    /// Stop serving and wait for in-flight requests.
    pub async fn shutdown(&mut self) -> Result<(), GatewayError> {
        info!("Initiating graceful shutdown...");
        self.gateway.shutdown().await?;
        info!(
            height = self.ledger.height(),
            sellers = self.catalog.delegated_sellers().await,
            "Shutdown complete"
        );
        Ok(())
    }

    pub fn catalog(&self) -> Arc<CatalogContext> {
        Arc::clone(&self.catalog)
    }

    pub fn ledger(&self) -> Arc<InMemoryLedger> {
        Arc::clone(&self.ledger)
    }
}
