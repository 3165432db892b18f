//! # Catalog-Anchor Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── flows.rs      # catalog workflow ↔ ledger ↔ matcher ↔ deriver
//! │   └── http_api.rs   # the same flows through the axum router
//! └── benches/
//!     └── core_benchmarks.rs   # deriver and matcher throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p catalog-tests
//! cargo bench -p catalog-tests
//! ```

pub mod integration;
