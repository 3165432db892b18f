//! # Catalog-Anchor Core Benchmarks
//!
//! | Core | Operation | Scales with |
//! |------|-----------|-------------|
//! | cc-01 Content Address | canonicalize + BLAKE2b-256 + CID | payload size |
//! | cc-02 Listing Matcher | linear block scan | extrinsics per block |

use cc_01_content_address::derive_address;
use cc_02_listing_matcher::{ListingMatcher, MatchPolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};
use shared_types::{Block, BlockHash, Extrinsic};
use std::time::Duration;

// ============================================================================
// CC-01: Content Address Deriver
// ============================================================================

fn product_payload(attributes: usize) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!("Apple"));
    for i in 0..attributes {
        map.insert(format!("attr_{i:04}"), json!({"value": i, "unit": "kg"}));
    }
    Value::Object(map)
}

fn bench_derive_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-01-content-address");
    group.measurement_time(Duration::from_secs(5));

    for attributes in [1, 16, 256] {
        let payload = product_payload(attributes);
        group.throughput(Throughput::Elements(attributes as u64));
        group.bench_with_input(
            BenchmarkId::new("derive_address", attributes),
            &payload,
            |b, payload| b.iter(|| black_box(derive_address(payload).is_ok())),
        );
    }

    group.finish();
}

// ============================================================================
// CC-02: Listing Matcher
// ============================================================================

fn listing_block(extrinsics: usize) -> Block {
    let extrinsics = (0..extrinsics)
        .map(|i| {
            Extrinsic::new(
                "product",
                "list",
                vec![
                    json!(format!("listing-{i}")),
                    json!("0xcreator"),
                    json!("0xhash"),
                    json!("store:1"),
                    json!(i.to_string()),
                    json!("baddr"),
                    json!("product:1"),
                ],
            )
        })
        .collect();

    Block {
        hash: BlockHash([1u8; 32]),
        number: 1,
        parent_hash: BlockHash::ZERO,
        extrinsics,
    }
}

fn bench_listing_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-02-listing-matcher");
    group.measurement_time(Duration::from_secs(5));

    for size in [10, 100, 1000] {
        let block = listing_block(size);
        let target = format!("listing-{}", size - 1);
        group.throughput(Throughput::Elements(size as u64));

        for policy in [MatchPolicy::FirstWins, MatchPolicy::LastWins] {
            let matcher = ListingMatcher::new(policy);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), size),
                &block,
                |b, block| b.iter(|| black_box(matcher.find(block, &target).is_ok())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_derive_address, bench_listing_scan);
criterion_main!(benches);
