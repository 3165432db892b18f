//! Canonical JSON encoding.
//!
//! Object keys are written in bytewise-sorted order at every level, with no
//! insignificant whitespace. Strings and numbers use serde_json's rendering,
//! so the output is valid JSON that any consumer can re-parse.

use serde::Serialize;
use serde_json::Value;

use super::errors::EncodingError;
use super::finite::ensure_finite;

/// Deepest array/object nesting the canonical writer accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Encode `payload` as canonical JSON bytes.
///
/// NaN and infinite floats are rejected rather than written as `null`.
pub fn canonical_bytes<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, EncodingError> {
    ensure_finite(payload)?;
    let value = serde_json::to_value(payload)?;
    let mut out = Vec::with_capacity(128);
    write_value(&value, &mut out, 0)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut Vec<u8>, depth: usize) -> Result<(), EncodingError> {
    match value {
        Value::Array(items) => {
            check_depth(depth)?;
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out, depth + 1)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            check_depth(depth)?;
            // `preserve_order` may be enabled on serde_json elsewhere in the build.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, key)?;
                out.push(b':');
                write_value(item, out, depth + 1)?;
            }
            out.push(b'}');
        }
        scalar => serde_json::to_writer(&mut *out, scalar)?,
    }
    Ok(())
}

fn check_depth(depth: usize) -> Result<(), EncodingError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(EncodingError::TooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}
