//! # HTTP API Flows
//!
//! The gateway router driven with `tower::ServiceExt::oneshot`, checking
//! that what the HTTP layer reports is what the ledger and the matcher see.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use cc_02_listing_matcher::find_listing;
    use cc_03_ledger_client::{InMemoryLedger, LedgerClient, LedgerError, Receipt, SignedCall};
    use cc_04_catalog_service::CatalogContext;
    use cc_05_api_gateway::{build_router, AppState, GatewayConfig, API_BASE};
    use serde_json::{json, Value};
    use shared_types::{Block, BlockHash};
    use tower::ServiceExt;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// A ledger whose endpoint is down.
    struct OfflineLedger;

    #[async_trait]
    impl LedgerClient for OfflineLedger {
        async fn submit_batch(&self, _calls: Vec<SignedCall>) -> Result<Receipt, LedgerError> {
            Err(LedgerError::Unavailable("connection refused".into()))
        }

        async fn fetch_block(&self, _hash: &BlockHash) -> Result<Block, LedgerError> {
            Err(LedgerError::Unavailable("connection refused".into()))
        }

        async fn latest_block(&self) -> Result<Block, LedgerError> {
            Err(LedgerError::Unavailable("connection refused".into()))
        }
    }

    fn router_over(ledger: Arc<dyn LedgerClient>, config: &GatewayConfig) -> (Router, AppState) {
        let catalog = CatalogContext::new(ledger, config.catalog.clone()).unwrap();
        let state = AppState::new(Arc::new(catalog));
        (build_router(state.clone(), config), state)
    }

    fn app() -> (Router, AppState) {
        router_over(Arc::new(InMemoryLedger::new()), &GatewayConfig::default())
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(route: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(format!("{API_BASE}{route}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // =============================================================================
    // FULL FLOW
    // =============================================================================

    #[tokio::test]
    async fn test_marketplace_flow_over_http() {
        let (app, state) = app();

        let (status, delegated) = call(
            &app,
            post_json("/item_delegate", json!({"identifier": "//seller//1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{delegated}");

        let (status, created) = call(
            &app,
            post_json(
                "/item_create",
                json!({"identifier": "//seller//1", "product": {"name": "Pear", "price": "30"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{created}");

        let (status, listed) = call(
            &app,
            post_json(
                "/item_add",
                json!({
                    "identifier": "//seller//1",
                    "product": {"name": "Apple", "price": 100},
                    "seller_name": "Fresh Fruits",
                    "selling_price": "90"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{listed}");
        let listing_id = listed["product_list_id"].as_str().unwrap().to_string();
        let block_hash = listed["blockHash"].as_str().unwrap().to_string();

        // The block served over HTTP decodes and scans like the ledger's own.
        let (status, served) = call(&app, get(&format!("{API_BASE}/block/{block_hash}"))).await;
        assert_eq!(status, StatusCode::OK);
        let block: Block = serde_json::from_value(served).unwrap();
        let found = find_listing(&block, &listing_id).unwrap();
        assert_eq!(found.price.value(), 90);

        let (status, ordered) = call(
            &app,
            post_json(
                "/order_confirm",
                json!({
                    "identifier": "//buyer//1",
                    "listId": listing_id,
                    "blockHash": block_hash,
                    "order_price": 85
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{ordered}");

        let order_hash = ordered["block"].as_str().unwrap();
        let (_, order_block) = call(&app, get(&format!("{API_BASE}/block/{order_hash}"))).await;
        assert_eq!(order_block["extrinsics"][0]["method"], "order");
        assert_eq!(order_block["extrinsics"][0]["args"][4], "85");
        assert_eq!(order_block["extrinsics"][0]["args"][6], listing_id.as_str());

        let snapshot = state.metrics.snapshot();
        assert_eq!(snapshot.errors, 0);
        assert_eq!(snapshot.anchors, 4);
    }

    // =============================================================================
    // ERROR MAPPING
    // =============================================================================

    #[tokio::test]
    async fn test_offline_ledger_is_503() {
        let (app, _) = router_over(Arc::new(OfflineLedger), &GatewayConfig::default());

        let (status, body) = call(
            &app,
            post_json(
                "/item_add",
                json!({"identifier": "//seller//1", "product": {"name": "Apple"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("ledger unavailable"));
    }

    #[tokio::test]
    async fn test_validation_runs_before_the_ledger() {
        // Input errors never reach the offline ledger.
        let (app, _) = router_over(Arc::new(OfflineLedger), &GatewayConfig::default());

        let (status, body) = call(
            &app,
            post_json("/item_add", json!({"identifier": "//seller//1", "product": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "product is a required field");

        let (status, _) = call(
            &app,
            post_json(
                "/item_add",
                json!({"identifier": "//seller//1", "product": {"name": "A", "price": -1}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_null_product_name_is_listed() {
        let (app, _) = app();
        let (status, body) = call(
            &app,
            post_json(
                "/item_add",
                json!({"identifier": "//seller//1", "product": {"name": null, "price": "5"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_order_on_wrong_block_is_404() {
        let (app, _) = app();
        let (_, listed) = call(
            &app,
            post_json(
                "/item_add",
                json!({"identifier": "//seller//1", "product": {"name": "Apple"}}),
            ),
        )
        .await;
        let (_, created) = call(
            &app,
            post_json("/item_create", json!({"product": {"name": "Pear"}})),
        )
        .await;

        let (status, body) = call(
            &app,
            post_json(
                "/order_confirm",
                json!({
                    "identifier": "//buyer//1",
                    "listId": listed["product_list_id"],
                    "blockHash": created["block"]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    // =============================================================================
    // MIDDLEWARE
    // =============================================================================

    #[tokio::test]
    async fn test_cors_preflight_on_catalog_route() {
        let mut config = GatewayConfig::default();
        config.cors.allowed_origins = vec!["https://shop.example".into()];
        let (app, _) = router_over(Arc::new(InMemoryLedger::new()), &config);

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(format!("{API_BASE}/item_add"))
            .header("origin", "https://shop.example")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://shop.example"
        );
    }
}
