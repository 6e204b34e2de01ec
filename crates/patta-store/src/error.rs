//! Store error types

use patta_domain::ClaimId;
use thiserror::Error;

/// Errors from the claim ledger and the gazetteer
#[derive(Error, Debug)]
pub enum StoreError {
    /// No claim with this id
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    /// An id prefix matched more than one claim
    #[error("Ambiguous claim id '{prefix}' matches {count} claims")]
    AmbiguousId {
        /// Prefix that was given
        prefix: String,
        /// Number of matches
        count: usize,
    },

    /// A claim with this id already exists
    #[error("Duplicate claim: {0}")]
    DuplicateClaim(ClaimId),

    /// Two gazetteer entries share a name
    #[error("Duplicate village name: {0}")]
    DuplicateVillage(String),

    /// I/O error reading or writing a snapshot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
