//! # Listing Matcher (cc-02)
//!
//! Scans the extrinsics of a fetched block for the registration of a given
//! listing and extracts its positional arguments into a [`ListingMatch`].
//!
//! ## Scan
//!
//! ```text
//! Block.extrinsics ──→ filter section.method == product.list
//!                            │
//!                            ↓  args[0] == target (exact, case-sensitive)
//!                      shape check (7 args) ──fail──→ MatchError::ArgumentShape
//!                            │
//!                            ↓  args[4] as u128 ──fail──→ MatchError::Parse
//!                      candidate
//!                            │
//!                            ↓  MatchPolicy
//!        LastWins: keep scanning, latest candidate kept
//!        FirstWins: stop here
//!        RejectDuplicates: second candidate ──→ MatchError::DuplicateListing
//! ```
//!
//! A listing extrinsic with no arguments carries no candidate id and is
//! skipped. Errors surface at the first malformed *matching* extrinsic in
//! block order; unrelated malformed extrinsics are ignored.
//!
//! The matcher holds no state and never touches the network.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;

pub use domain::{
    find_listing, ListingMatch, ListingMatcher, ListingOperation, MatchError, MatchPolicy,
    PolicyParseError, LISTING_ARITY,
};
