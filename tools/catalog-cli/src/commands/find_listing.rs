//! `catalog find-listing --block <file> --listing <id>`

use std::fmt;
use std::path::PathBuf;

use cc_02_listing_matcher::{ListingMatch, ListingMatcher, MatchPolicy};
use clap::Args;
use serde::Serialize;
use shared_types::Block;

use super::{read_input, CommandError};

#[derive(Args, Debug, Clone)]
pub struct FindListingArgs {
    /// Block JSON as served by `GET /block/:hash`, or `-` for stdin
    #[arg(long)]
    pub block: PathBuf,

    /// Listing id to look for
    #[arg(long)]
    pub listing: String,

    /// Duplicate handling: last_wins, first_wins or reject_duplicates
    #[arg(long, default_value_t = MatchPolicy::LastWins)]
    pub policy: MatchPolicy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct MatchReport(pub ListingMatch);

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        writeln!(f, "listing:  {}", m.listing_id)?;
        writeln!(f, "block:    {} (extrinsic #{})", m.block_hash, m.extrinsic_index)?;
        writeln!(f, "creator:  {}", m.creator_address)?;
        writeln!(f, "store:    {}", m.store_id)?;
        writeln!(f, "price:    {}", m.price)?;
        writeln!(f, "hash:     {}", m.content_hash)?;
        writeln!(f, "address:  {}", m.content_address)?;
        write!(f, "product:  {}", m.linked_listing_id)
    }
}

pub fn run(args: &FindListingArgs) -> Result<MatchReport, CommandError> {
    let block: Block = serde_json::from_str(&read_input(&args.block)?)?;
    scan(&block, &args.listing, args.policy)
}

pub fn scan(block: &Block, listing_id: &str, policy: MatchPolicy) -> Result<MatchReport, CommandError> {
    let found = ListingMatcher::new(policy).find(block, listing_id)?;
    Ok(MatchReport(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::{BlockHash, Extrinsic};
    use std::io::Write;

    fn listing(id: &str, price: u64) -> Extrinsic {
        Extrinsic::new(
            "product",
            "list",
            vec![
                json!(id),
                json!("0xcreator"),
                json!("0xhash"),
                json!("store:1"),
                json!(price),
                json!("bafy"),
                json!("product:1"),
            ],
        )
    }

    fn block() -> Block {
        Block {
            hash: BlockHash([7u8; 32]),
            number: 3,
            parent_hash: BlockHash([6u8; 32]),
            extrinsics: vec![listing("L1", 100), listing("L2", 5), listing("L1", 120)],
        }
    }

    #[test]
    fn test_policies() {
        let last = scan(&block(), "L1", MatchPolicy::LastWins).unwrap();
        assert_eq!(last.0.price.value(), 120);

        let first = scan(&block(), "L1", MatchPolicy::FirstWins).unwrap();
        assert_eq!(first.0.price.value(), 100);

        assert!(matches!(
            scan(&block(), "L1", MatchPolicy::RejectDuplicates),
            Err(CommandError::Match(_))
        ));
    }

    #[test]
    fn test_run_reads_block_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&block()).unwrap()).unwrap();

        let args = FindListingArgs {
            block: file.path().to_path_buf(),
            listing: "L2".into(),
            policy: MatchPolicy::default(),
        };
        let report = run(&args).unwrap();
        assert_eq!(report.0.extrinsic_index, 1);
        assert!(report.to_string().contains("store:    store:1"));
    }

    #[test]
    fn test_not_found() {
        let err = scan(&block(), "missing", MatchPolicy::LastWins).unwrap_err();
        assert!(matches!(err, CommandError::Match(ref e) if e.is_not_found()));
    }
}
