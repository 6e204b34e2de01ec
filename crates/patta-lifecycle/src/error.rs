//! Error types for lifecycle operations

use crate::lifecycle::Action;
use patta_domain::ClaimStatus;
use thiserror::Error;

/// Errors that can occur while moving a claim through its lifecycle
///
/// A rejected operation never changes the claim it was given.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifecycleError {
    /// The action is not allowed from the claim's current status
    #[error("Invalid transition: cannot {action} a claim in status '{from}'")]
    InvalidTransition {
        /// Status the claim was in
        from: ClaimStatus,
        /// Action that was attempted
        action: Action,
    },

    /// A required field is empty or absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field value could not be interpreted
    #[error("Invalid value '{value}' for field {field}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Offending value
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
