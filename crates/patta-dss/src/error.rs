//! Decision-support error types

use thiserror::Error;

/// Errors that can occur when producing recommendations
///
/// An empty recommendation list is not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DssError {
    /// The village is not in the gazetteer
    #[error("Village not found: {0}")]
    VillageNotFound(String),

    /// Registry lookup failed
    #[error("Registry error: {0}")]
    Registry(String),
}
