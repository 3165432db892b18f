//! Routes of the catalog HTTP API.
//!
//! ```text
//! POST /api/v1/cord/item_create     create a product
//! POST /api/v1/cord/item_delegate   add a seller as schema delegate
//! POST /api/v1/cord/item_add        create a product and list it
//! POST /api/v1/cord/order_confirm   order against a listing
//! GET  /api/v1/cord/block/:hash     block as the ledger reports it
//! GET  /health
//! GET  /metrics
//! ```

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{
    AnchorResponse, ItemAddBody, ItemCreateBody, ItemDelegateBody, ListingResponse,
    OrderConfirmBody,
};
use crate::middleware::{create_cors_layer, GatewayMetrics, RequestTimer, TimeoutLayer, TracingLayer};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use cc_04_catalog_service::CatalogApi;
use shared_types::{Block, BlockHash};
use std::future::Future;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, warn};

/// Base path of the catalog routes
pub const API_BASE: &str = "/api/v1/cord";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            catalog,
            metrics: Arc::new(GatewayMetrics::new()),
        }
    }
}

/// Build the full router with its middleware stack.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(&config.cors))
        .layer(TracingLayer::new())
        .layer(TimeoutLayer::new(
            config.timeouts.clone(),
            Arc::clone(&state.metrics),
        ));

    let cord = Router::new()
        .route("/item_create", post(item_create))
        .route("/item_delegate", post(item_delegate))
        .route("/item_add", post(item_add))
        .route("/order_confirm", post(order_confirm))
        .route("/block/:hash", get(block_details));

    Router::new()
        .nest(API_BASE, cord)
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(DefaultBodyLimit::max(config.limits.max_request_size))
        .layer(middleware)
        .with_state(state)
}

/// Time `work`, count it, and log failures.
async fn observe<T, F>(
    state: &AppState,
    route: &'static str,
    is_anchor: bool,
    work: F,
) -> ApiResult<Json<T>>
where
    F: Future<Output = ApiResult<T>>,
{
    let timer = RequestTimer::new(Arc::clone(&state.metrics), is_anchor);
    let result = work.await;

    match &result {
        Ok(_) => {
            debug!(route, "request succeeded");
            timer.finish(true);
        }
        Err(e) => {
            if e.is_not_found() {
                state.metrics.record_not_found();
            }
            warn!(route, status = e.status.as_u16(), error = %e.message, "request failed");
            timer.finish(false);
        }
    }

    result.map(Json)
}

async fn item_create(
    State(state): State<AppState>,
    payload: Result<Json<ItemCreateBody>, JsonRejection>,
) -> ApiResult<Json<AnchorResponse>> {
    observe(&state, "item_create", true, async {
        let Json(body) = payload?;
        let (product, creator) = body.into_parts()?;
        let outcome = state
            .catalog
            .create_product(product, creator.as_deref())
            .await?;
        Ok(AnchorResponse::from(outcome))
    })
    .await
}

async fn item_delegate(
    State(state): State<AppState>,
    payload: Result<Json<ItemDelegateBody>, JsonRejection>,
) -> ApiResult<Json<AnchorResponse>> {
    observe(&state, "item_delegate", true, async {
        let Json(body) = payload?;
        let seller = body.into_seller_uri()?;
        let outcome = state.catalog.delegate_seller(&seller).await?;
        Ok(AnchorResponse::from(outcome))
    })
    .await
}

async fn item_add(
    State(state): State<AppState>,
    payload: Result<Json<ItemAddBody>, JsonRejection>,
) -> ApiResult<Json<ListingResponse>> {
    observe(&state, "item_add", true, async {
        let Json(body) = payload?;
        let request = body.into_request()?;
        let outcome = state.catalog.list_product(request).await?;
        Ok(ListingResponse::from(outcome))
    })
    .await
}

async fn order_confirm(
    State(state): State<AppState>,
    payload: Result<Json<OrderConfirmBody>, JsonRejection>,
) -> ApiResult<Json<AnchorResponse>> {
    observe(&state, "order_confirm", true, async {
        let Json(body) = payload?;
        let request = body.into_request()?;
        let outcome = state.catalog.confirm_order(request).await?;
        Ok(AnchorResponse::from(outcome))
    })
    .await
}

async fn block_details(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> ApiResult<Json<Block>> {
    observe(&state, "block", false, async {
        let hash: BlockHash = hash.trim().parse()?;
        let block = state.catalog.block_details(&hash).await?;
        Ok::<_, ApiError>(block)
    })
    .await
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "catalog-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}
