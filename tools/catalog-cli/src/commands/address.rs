//! `catalog address <file|->`

use std::fmt;
use std::path::PathBuf;

use cc_01_content_address::{canonical_bytes, derive_address, ContentAddress};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use super::{read_input, CommandError};

#[derive(Args, Debug, Clone)]
pub struct AddressArgs {
    /// JSON payload file, or `-` for stdin
    pub input: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressReport {
    pub address: ContentAddress,
    pub digest: String,
    pub canonical_len: usize,
}

impl fmt::Display for AddressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address: {}", self.address)?;
        writeln!(f, "digest:  {}", self.digest)?;
        write!(f, "bytes:   {}", self.canonical_len)
    }
}

pub fn run(args: &AddressArgs) -> Result<AddressReport, CommandError> {
    address_of_text(&read_input(&args.input)?)
}

/// Address of a JSON document given as text.
pub fn address_of_text(text: &str) -> Result<AddressReport, CommandError> {
    let payload: Value = serde_json::from_str(text)?;
    let canonical_len = canonical_bytes(&payload)?.len();
    let address = derive_address(&payload)?;

    Ok(AddressReport {
        digest: address.digest_hex(),
        address,
        canonical_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_payload() {
        let report = address_of_text(r#"{ "price": "100", "name": "Apple" }"#).unwrap();
        assert_eq!(
            report.address.to_string(),
            "bagqoiava4qbcav4zbgx7ruymmjv5vemdg5zbbluf3rsgkgq5csk33ma7f74c7zt4"
        );
        assert_eq!(
            report.digest,
            "0x579909aff8d30c626bda9183377210ae85dc64651a1d1495bdb01f2ff82fe67c"
        );
        assert_eq!(report.canonical_len, r#"{"name":"Apple","price":"100"}"#.len());
    }

    #[test]
    fn test_empty_object() {
        let report = address_of_text("{}").unwrap();
        assert_eq!(report.canonical_len, 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            address_of_text("{name:"),
            Err(CommandError::Json(_))
        ));
    }

    #[test]
    fn test_text_rendering() {
        let text = address_of_text("{}").unwrap().to_string();
        assert!(text.starts_with("address: b"));
        assert!(text.contains("digest:  0x"));
    }
}
