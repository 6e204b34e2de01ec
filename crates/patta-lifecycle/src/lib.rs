//! Patta Lifecycle
//!
//! Moves forest-rights claims through their review states.
//!
//! The lifecycle provides:
//! - Intake of extraction records, with a confidence gate choosing the initial status
//! - The explicit review and link transitions
//! - Manual field edits that treat the edited value as ground truth
//! - A review queue ordered by certainty
//!
//! # Examples
//!
//! ```
//! use patta_lifecycle::{ClaimLifecycle, LifecycleConfig};
//!
//! let lifecycle = ClaimLifecycle::new(LifecycleConfig::strict());
//! assert_eq!(lifecycle.config().review_threshold, 0.9);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;
mod lifecycle;
mod metrics;
mod queue;

pub use config::{LifecycleConfig, DEFAULT_REVIEW_THRESHOLD};
pub use error::LifecycleError;
pub use gate::ConfidenceGate;
pub use lifecycle::{Action, ClaimLifecycle, ExtractionRecord, GeoLink, ReviewEdits};
pub use metrics::LifecycleMetrics;
pub use queue::review_queue;
