//! API Gateway service - binds the HTTP server and manages its lifecycle.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::GatewayMetrics;
use crate::router::{build_router, AppState};
use axum::Router;
use cc_04_catalog_service::CatalogApi;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<std::io::Result<()>>>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service over `catalog`
    pub fn new(config: GatewayConfig, catalog: Arc<dyn CatalogApi>) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            state: AppState::new(catalog),
            shutdown_tx: None,
            server: None,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    /// Build HTTP router
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Bind the HTTP server and serve in the background.
    ///
    /// Returns the bound address, which differs from the configured one when
    /// the configured port is 0.
    pub async fn start(&mut self) -> Result<SocketAddr, GatewayError> {
        if self.server.is_some() {
            return Err(GatewayError::AlreadyRunning);
        }

        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = self.build_router();

        info!(addr = %local_addr, "Starting HTTP server");
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        self.shutdown_tx = Some(shutdown_tx);
        self.server = Some(server);
        info!(addr = %local_addr, base = crate::router::API_BASE, "API Gateway started");
        Ok(local_addr)
    }

    /// Trigger graceful shutdown and wait for in-flight requests.
    pub async fn shutdown(&mut self) -> Result<(), GatewayError> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(server) = self.server.take() {
            match server.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(error = %e, "HTTP server error");
                    return Err(GatewayError::Server(e.to_string()));
                }
                Err(e) => return Err(GatewayError::Server(e.to_string())),
            }
        }

        info!("API Gateway stopped");
        Ok(())
    }

    /// Serve until `signal` resolves, then shut down.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()>,
    {
        self.start().await?;
        signal.await;
        info!("Received shutdown signal");
        self.shutdown().await
    }
}
