//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the claim core and its
//! collaborators. Implementations live in `patta-store`.

use crate::{Claim, ClaimId, ClaimStatus, ClaimType, Village, VillageId};

/// Trait for the owned collection of claims
///
/// Implemented by the infrastructure layer (patta-store)
pub trait ClaimStore {
    /// Error type for store operations
    type Error;

    /// Add a newly extracted claim
    fn insert_claim(&mut self, claim: Claim) -> Result<ClaimId, Self::Error>;

    /// Replace an existing claim by id
    fn replace_claim(&mut self, claim: Claim) -> Result<(), Self::Error>;

    /// Get a claim by ID
    fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, Self::Error>;

    /// Query claims matching criteria
    fn query_claims(&self, query: &ClaimQuery) -> Result<Vec<Claim>, Self::Error>;
}

/// Query criteria for retrieving claims
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    /// Filter by linked village name
    pub linked_village: Option<String>,

    /// Filter by status
    pub status: Option<ClaimStatus>,

    /// Filter by claim type
    pub claim_type: Option<ClaimType>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl ClaimQuery {
    /// Check whether a claim satisfies every set criterion (ignores `limit`)
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(village) = &self.linked_village {
            if !claim.is_linked_to(village) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if claim.status != status {
                return false;
            }
        }
        if let Some(claim_type) = self.claim_type {
            if claim.claim_type.value != claim_type {
                return false;
            }
        }
        true
    }
}

/// Trait for the village gazetteer
///
/// Implemented by the infrastructure layer (patta-store)
pub trait VillageRegistry {
    /// Error type for registry lookups
    type Error;

    /// Find a village by its canonical name
    fn find_by_name(&self, name: &str) -> Result<Option<Village>, Self::Error>;

    /// Find a village by gazetteer id
    fn find_by_id(&self, id: &VillageId) -> Result<Option<Village>, Self::Error>;

    /// All known villages
    fn villages(&self) -> Result<Vec<Village>, Self::Error>;
}
