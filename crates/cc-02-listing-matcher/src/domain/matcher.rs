//! # Block Scan
//!
//! [`ListingMatcher`] walks a block's extrinsics in order and applies the
//! configured [`MatchPolicy`] to every registration of the target id.

use shared_types::{AccountAddress, Block, Extrinsic, Price};
use tracing::{debug, trace};

use super::entities::{arg, ListingMatch, ListingOperation, MatchPolicy, LISTING_ARITY};
use super::errors::MatchError;

/// Finds listing registrations inside a block.
#[derive(Debug, Clone, Default)]
pub struct ListingMatcher {
    operation: ListingOperation,
    policy: MatchPolicy,
}

impl ListingMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            operation: ListingOperation::default(),
            policy,
        }
    }

    /// Match a different `section.method` than `product.list`.
    pub fn with_operation(mut self, operation: ListingOperation) -> Self {
        self.operation = operation;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn operation(&self) -> &ListingOperation {
        &self.operation
    }

    /// Scan `block` for the registration of `listing_id`.
    pub fn find(&self, block: &Block, listing_id: &str) -> Result<ListingMatch, MatchError> {
        let mut selected: Option<ListingMatch> = None;
        let mut count = 0usize;

        for (index, extrinsic) in block.extrinsics.iter().enumerate() {
            if !extrinsic.is_call(&self.operation.section, &self.operation.method) {
                continue;
            }
            let Some(candidate) = extrinsic.arg_text(arg::LISTING_ID) else {
                trace!(index, "listing extrinsic without arguments skipped");
                continue;
            };
            if candidate != listing_id {
                continue;
            }

            let found = extract(block, index, extrinsic)?;
            count += 1;

            match self.policy {
                MatchPolicy::FirstWins => return Ok(found),
                MatchPolicy::LastWins => selected = Some(found),
                MatchPolicy::RejectDuplicates => {
                    if selected.is_none() {
                        selected = Some(found);
                    }
                }
            }
        }

        if self.policy == MatchPolicy::RejectDuplicates && count > 1 {
            return Err(MatchError::DuplicateListing {
                listing_id: listing_id.to_string(),
                block_hash: block.hash,
                count,
            });
        }

        match selected {
            Some(found) => {
                debug!(
                    listing_id,
                    block = %block.hash,
                    index = found.extrinsic_index,
                    registrations = count,
                    policy = %self.policy,
                    "listing located"
                );
                Ok(found)
            }
            None => Err(MatchError::NotFound {
                listing_id: listing_id.to_string(),
                block_hash: block.hash,
            }),
        }
    }
}

/// Scan `block` for `listing_id` with the default policy (last match wins).
pub fn find_listing(block: &Block, listing_id: &str) -> Result<ListingMatch, MatchError> {
    ListingMatcher::default().find(block, listing_id)
}

/// Read the positional layout of a matching extrinsic.
///
/// Arguments past [`LISTING_ARITY`] are ignored.
fn extract(block: &Block, index: usize, extrinsic: &Extrinsic) -> Result<ListingMatch, MatchError> {
    if extrinsic.args.len() < LISTING_ARITY {
        return Err(MatchError::ArgumentShape {
            index,
            call: extrinsic.call_name(),
            expected: LISTING_ARITY,
            actual: extrinsic.args.len(),
        });
    }

    let text = |position: usize| {
        extrinsic
            .arg_text(position)
            .map(|cow| cow.into_owned())
            .unwrap_or_default()
    };

    let price = text(arg::PRICE)
        .parse::<Price>()
        .map_err(|source| MatchError::Parse {
            index,
            field: "price",
            source,
        })?;

    Ok(ListingMatch {
        listing_id: text(arg::LISTING_ID),
        creator_address: AccountAddress(text(arg::CREATOR)),
        content_hash: text(arg::CONTENT_HASH),
        store_id: text(arg::STORE_ID),
        price,
        content_address: text(arg::CONTENT_ADDRESS),
        linked_listing_id: text(arg::LINKED_LISTING_ID),
        extrinsic_index: index,
        block_hash: block.hash,
    })
}
