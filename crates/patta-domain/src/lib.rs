//! Patta Domain Layer
//!
//! This crate contains the core data model for forest-rights claim management.
//! It defines the value objects and trait interfaces that the lifecycle,
//! decision-support and storage crates depend upon.
//!
//! ## Key Concepts
//!
//! - **ConfidenceField**: An extracted value paired with a [0, 1] certainty score
//! - **Claim**: A forest-rights claim (IFR, CFR or CR) moving through review states
//! - **Village**: A gazetteer entry with asset coverage percentages
//! - **DssRecommendation**: One decision-support recommendation with its priority
//!
//! ## Architecture
//!
//! - Pure data and small helpers only
//! - Infrastructure implementations (ledger, gazetteer) live in `patta-store`
//! - Trait definitions for every collaborator seam live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod confidence;
pub mod recommendation;
pub mod traits;
pub mod village;

// Re-exports for convenience
pub use claim::{Claim, ClaimField, ClaimId, ClaimStatus, ClaimType, GeoPoint};
pub use confidence::ConfidenceField;
pub use recommendation::DssRecommendation;
pub use village::{AssetCoverage, Bounds, Village, VillageId};
