//! # Content Address Properties (cc-01)
//!
//! Regression and property tests for the deriver:
//!
//! 1. **Golden values** - fixed payloads map to recorded addresses
//! 2. **Determinism / idempotence** - repeated derivations agree
//! 3. **Key-order independence** - input key order never changes the address
//! 4. **Sensitivity** - any canonical byte change changes the address

use cc_01_content_address::{
    canonical_bytes, derive_address, verify_address, ContentAddress, EncodingError,
};
use proptest::prelude::*;
use serde::Serialize;
use serde_json::{json, Map, Value};

// =============================================================================
// GOLDEN VALUES
// =============================================================================

const APPLE_ADDRESS: &str = "bagqoiava4qbcav4zbgx7ruymmjv5vemdg5zbbluf3rsgkgq5csk33ma7f74c7zt4";
const APPLE_DIGEST: &str = "0x579909aff8d30c626bda9183377210ae85dc64651a1d1495bdb01f2ff82fe67c";
const EMPTY_ADDRESS: &str = "bagqoiava4qbcbqe5uurnvqtbypjfmyrqx3iq2lz66e7y45suk5wbf2cx4b7xqyey";

#[test]
fn test_golden_apple_listing() {
    let address = derive_address(&json!({"name": "Apple", "price": "100"})).unwrap();
    assert_eq!(address.to_string(), APPLE_ADDRESS);
    assert_eq!(address.digest_hex(), APPLE_DIGEST);
}

#[test]
fn test_golden_apple_listing_reversed_keys() {
    let mut map = Map::new();
    map.insert("price".to_string(), json!("100"));
    map.insert("name".to_string(), json!("Apple"));
    let address = derive_address(&Value::Object(map)).unwrap();
    assert_eq!(address.to_string(), APPLE_ADDRESS);
}

#[test]
fn test_golden_from_struct() {
    #[derive(Serialize)]
    struct Item {
        price: String,
        name: String,
    }
    let item = Item {
        price: "100".into(),
        name: "Apple".into(),
    };
    assert_eq!(derive_address(&item).unwrap().to_string(), APPLE_ADDRESS);
}

#[test]
fn test_empty_object_is_valid() {
    let address = derive_address(&json!({})).unwrap();
    assert_eq!(address.to_string(), EMPTY_ADDRESS);
    assert_eq!(canonical_bytes(&json!({})).unwrap(), b"{}");
}

#[test]
fn test_golden_parses_back() {
    let parsed: ContentAddress = APPLE_ADDRESS.parse().unwrap();
    assert_eq!(parsed.digest_hex(), APPLE_DIGEST);
}

// =============================================================================
// DETERMINISM AND SENSITIVITY
// =============================================================================

#[test]
fn test_idempotent_on_same_reference() {
    let payload = json!({"name": "Apple", "tags": ["fresh", "red"], "stock": 12});
    assert_eq!(derive_address(&payload).unwrap(), derive_address(&payload).unwrap());
}

#[test]
fn test_structurally_equal_objects_agree() {
    let a = json!({"outer": {"x": 1, "y": [1, 2]}});
    let b: Value = serde_json::from_str(r#"{ "outer" : { "y" : [1,2], "x" : 1 } }"#).unwrap();
    assert_eq!(derive_address(&a).unwrap(), derive_address(&b).unwrap());
}

#[test]
fn test_value_change_changes_address() {
    let a = derive_address(&json!({"name": "Apple", "price": "100"})).unwrap();
    let b = derive_address(&json!({"name": "Apple", "price": "101"})).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_type_change_changes_address() {
    let a = derive_address(&json!({"price": "100"})).unwrap();
    let b = derive_address(&json!({"price": 100})).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_array_order_matters() {
    let a = derive_address(&json!({"tags": ["a", "b"]})).unwrap();
    let b = derive_address(&json!({"tags": ["b", "a"]})).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_verify_address_recomputes() {
    let payload = json!({"name": "Apple", "price": "100"});
    let genuine: ContentAddress = APPLE_ADDRESS.parse().unwrap();
    let forged: ContentAddress = EMPTY_ADDRESS.parse().unwrap();
    assert!(verify_address(&payload, &genuine).unwrap());
    assert!(!verify_address(&payload, &forged).unwrap());
}

#[test]
fn test_unserializable_payload_is_encoding_error() {
    struct Broken;
    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("unsupported type"))
        }
    }
    let err = derive_address(&Broken).unwrap_err();
    assert!(matches!(err, EncodingError::Serialize(_)));
    assert!(err.to_string().contains("unsupported type"));
}

#[test]
fn test_non_finite_floats_are_encoding_errors() {
    #[derive(Serialize)]
    struct Reading {
        x: Option<f64>,
    }

    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = derive_address(&Reading { x: Some(x) }).unwrap_err();
        assert!(matches!(err, EncodingError::NonFinite { .. }), "{x}: {err}");
    }

    // An explicit null still derives, and keeps its own address.
    let null = derive_address(&Reading { x: None }).unwrap();
    let zero = derive_address(&Reading { x: Some(0.0) }).unwrap();
    assert_ne!(null, zero);
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

fn flat_object() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-zA-Z_]{1,8}", "[ -~]{0,12}", 0..12)
        .prop_map(|m| m.into_iter().collect())
}

fn object_from(entries: &[(String, String)]) -> Value {
    let mut map = Map::new();
    for (k, v) in entries {
        map.insert(k.clone(), Value::String(v.clone()));
    }
    Value::Object(map)
}

proptest! {
    #[test]
    fn prop_key_order_independent(entries in flat_object()) {
        let forward = object_from(&entries);
        let mut reversed_entries = entries.clone();
        reversed_entries.reverse();
        let reversed = object_from(&reversed_entries);

        prop_assert_eq!(
            canonical_bytes(&forward).unwrap(),
            canonical_bytes(&reversed).unwrap()
        );
        prop_assert_eq!(derive_address(&forward).unwrap(), derive_address(&reversed).unwrap());
    }

    #[test]
    fn prop_canonical_bytes_reparse_to_same_value(entries in flat_object()) {
        let value = object_from(&entries);
        let bytes = canonical_bytes(&value).unwrap();
        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_extra_field_changes_address(entries in flat_object(), extra in "[ -~]{0,8}") {
        let base = object_from(&entries);
        let mut extended = base.clone();
        if let Value::Object(map) = &mut extended {
            // key outside the generated alphabet, so it never collides
            map.insert("0extra".to_string(), Value::String(extra));
        }
        prop_assert_ne!(derive_address(&base).unwrap(), derive_address(&extended).unwrap());
    }
}
