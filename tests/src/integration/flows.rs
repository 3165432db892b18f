//! # Workflow Flows
//!
//! The catalog context driving the in-memory ledger, with the matcher and
//! the deriver checked against what actually landed in blocks.
//!
//! ```text
//! CatalogContext ──submit──▶ InMemoryLedger ──fetch_block──▶ ListingMatcher
//!        │                                                      │
//!        └──────── ContentAddress must agree end to end ────────┘
//! ```

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use cc_01_content_address::ContentAddress;
    use cc_02_listing_matcher::{find_listing, ListingMatcher, MatchError, MatchPolicy};
    use cc_03_ledger_client::{Call, Identity, InMemoryLedger, LedgerClient, LedgerError};
    use cc_04_catalog_service::{
        CatalogApi, CatalogConfig, CatalogContext, CatalogError, ListingRequest, OrderRequest,
    };
    use serde_json::json;
    use shared_types::{Price, ProductItem};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn context(policy: MatchPolicy) -> (Arc<InMemoryLedger>, CatalogContext) {
        let ledger = Arc::new(InMemoryLedger::new());
        let config = CatalogConfig {
            match_policy: policy,
            ..CatalogConfig::default()
        };
        let catalog = CatalogContext::new(ledger.clone(), config).unwrap();
        (ledger, catalog)
    }

    fn apple() -> ProductItem {
        ProductItem::new("Apple")
            .with_attribute("price", json!(100))
            .with_attribute("sku", json!("APL-1"))
    }

    // =============================================================================
    // LISTING ↔ MATCHER ↔ DERIVER
    // =============================================================================

    #[tokio::test]
    async fn test_listing_addresses_agree_across_layers() {
        let (ledger, catalog) = context(MatchPolicy::LastWins);
        let request = ListingRequest::new(apple())
            .by_seller("//seller//1")
            .in_store("Fresh Fruits");
        let listed = catalog.list_product(request).await.unwrap();

        let block = ledger.fetch_block(&listed.block_hash).await.unwrap();
        let found = find_listing(&block, &listed.listing_id).unwrap();

        assert_eq!(found.price, Price(100));
        assert_eq!(found.store_id, listed.store_id);
        assert_eq!(found.linked_listing_id, listed.product_id);
        let seller = Identity::from_uri("//seller//1").unwrap();
        assert_eq!(found.creator_address, *seller.address());
        let registration = &block.extrinsics[found.extrinsic_index];
        assert_eq!(registration.signer.as_ref(), Some(catalog.network_author()));

        let parsed = ContentAddress::from_str(&found.content_address).unwrap();
        assert_eq!(parsed, listed.content_address);
        assert_eq!(found.content_hash, listed.content_address.digest_hex());
    }

    #[tokio::test]
    async fn test_order_references_listing() {
        let (ledger, catalog) = context(MatchPolicy::LastWins);
        let listed = catalog
            .list_product(ListingRequest::new(apple()).by_seller("//seller//1"))
            .await
            .unwrap();

        let ordered = catalog
            .confirm_order(OrderRequest {
                buyer_uri: "//buyer//1".into(),
                listing_id: listed.listing_id.clone(),
                block_hash: listed.block_hash,
                order_price: Some(Price(95)),
            })
            .await
            .unwrap();

        let block = ledger.fetch_block(&ordered.block_hash).await.unwrap();
        let order = block
            .extrinsics
            .iter()
            .find(|x| x.is_call("product", "order"))
            .unwrap();

        assert_eq!(order.arg_text(0).unwrap(), ordered.id.as_str());
        assert_eq!(order.arg_text(3).unwrap(), listed.store_id.as_str());
        assert_eq!(order.arg_text(4).unwrap(), "95");
        assert_eq!(
            order.arg_text(5).unwrap(),
            ordered.content_address.to_string().as_str()
        );
        assert_eq!(order.arg_text(6).unwrap(), listed.listing_id.as_str());

        let buyer = Identity::from_uri("//buyer//1").unwrap();
        assert_eq!(order.signer.as_ref(), Some(buyer.address()));
    }

    #[tokio::test]
    async fn test_identical_listings_share_address_but_not_block() {
        let (_, catalog) = context(MatchPolicy::LastWins);
        let first = catalog
            .list_product(ListingRequest::new(apple()).by_seller("//seller//1"))
            .await
            .unwrap();
        let second = catalog
            .list_product(ListingRequest::new(apple()).by_seller("//seller//1"))
            .await
            .unwrap();

        assert_eq!(first.content_address, second.content_address);
        assert_eq!(first.listing_id, second.listing_id);
        assert_ne!(first.block_hash, second.block_hash);
    }

    // =============================================================================
    // DUPLICATE REGISTRATIONS IN ONE BLOCK
    // =============================================================================

    /// Anchor two registrations of `L-dup` in a single block.
    async fn duplicate_block(ledger: &InMemoryLedger) -> shared_types::BlockHash {
        let author = Identity::from_uri("//Alice").unwrap();
        let calls = [100u128, 120]
            .into_iter()
            .map(|price| {
                let call = Call::list_product(
                    "L-dup",
                    author.address(),
                    "0xhash",
                    "store:1",
                    Price(price),
                    "baddr",
                    "product:1",
                );
                author.sign(call).unwrap()
            })
            .collect();
        ledger.submit_batch(calls).await.unwrap().block_hash
    }

    #[tokio::test]
    async fn test_duplicate_policies_on_orders() {
        for (policy, expected) in [
            (MatchPolicy::LastWins, Some(Price(120))),
            (MatchPolicy::FirstWins, Some(Price(100))),
            (MatchPolicy::RejectDuplicates, None),
        ] {
            let (ledger, catalog) = context(policy);
            let block_hash = duplicate_block(&ledger).await;

            let result = catalog
                .confirm_order(OrderRequest {
                    buyer_uri: "//buyer//1".into(),
                    listing_id: "L-dup".into(),
                    block_hash,
                    order_price: None,
                })
                .await;

            match expected {
                Some(price) => {
                    let ordered = result.unwrap();
                    let block = ledger.fetch_block(&ordered.block_hash).await.unwrap();
                    assert_eq!(
                        block.extrinsics[0].arg_text(4).unwrap(),
                        price.to_string().as_str(),
                        "{policy}"
                    );
                }
                None => assert!(matches!(
                    result,
                    Err(CatalogError::Match(MatchError::DuplicateListing { count: 2, .. }))
                )),
            }
        }
    }

    #[tokio::test]
    async fn test_matcher_and_context_agree_on_policy() {
        let (ledger, catalog) = context(MatchPolicy::FirstWins);
        let block_hash = duplicate_block(&ledger).await;
        let block = catalog.block_details(&block_hash).await.unwrap();

        let direct = ListingMatcher::new(MatchPolicy::FirstWins)
            .find(&block, "L-dup")
            .unwrap();
        assert_eq!(direct.extrinsic_index, 0);
        assert_eq!(direct.block_hash, block_hash);
    }

    // =============================================================================
    // LEDGER BOUNDARY
    // =============================================================================

    #[tokio::test]
    async fn test_tampered_call_rejected() {
        let ledger = InMemoryLedger::new();
        let author = Identity::from_uri("//Alice").unwrap();
        let mut signed = author
            .sign(Call::create_stream("stream:1", author.address(), "0xhash", "baddr"))
            .unwrap();
        signed.call.args[2] = json!("0xother");

        let before = ledger.height();
        let result = ledger.submit(signed).await;
        assert!(matches!(result, Err(LedgerError::BadSignature { .. })));
        assert_eq!(ledger.height(), before);
    }

    #[tokio::test]
    async fn test_workflow_grows_a_linked_chain() {
        let (ledger, catalog) = context(MatchPolicy::LastWins);
        catalog
            .list_product(ListingRequest::new(apple()).by_seller("//seller//1"))
            .await
            .unwrap();

        let mut block = ledger.latest_block().await.unwrap();
        let mut walked = 0;
        while block.number > 0 {
            let parent = ledger.fetch_block(&block.parent_hash).await.unwrap();
            assert_eq!(parent.number + 1, block.number);
            block = parent;
            walked += 1;
        }
        assert_eq!(walked, ledger.height());
        assert_eq!(block.hash, ledger.genesis_hash());
    }
}
