//! Patta Store
//!
//! In-memory implementations of the domain collaborator traits:
//!
//! - [`ClaimLedger`]: the owned claim collection ([`ClaimStore`](patta_domain::traits::ClaimStore))
//! - [`Gazetteer`]: the village registry ([`VillageRegistry`](patta_domain::traits::VillageRegistry))
//!
//! Both can be loaded from JSON files; the ledger can also be written back.
//! There is no database: a snapshot is a plain JSON array.

#![warn(missing_docs)]

mod error;
mod gazetteer;
mod ledger;

pub use error::StoreError;
pub use gazetteer::Gazetteer;
pub use ledger::ClaimLedger;
