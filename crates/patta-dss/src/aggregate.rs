//! Per-village claim aggregation

use patta_domain::{Claim, ClaimType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Claim counts for one gazetteer village
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageAggregate {
    /// Village name the claims are linked to
    pub village: String,
    /// Claims linked to the village
    pub claim_count: usize,
    /// Linked claims still unlinked or awaiting review
    pub pending_claims: usize,
    /// Community Forest Rights claims
    pub cfr_claims: usize,
    /// Individual Forest Rights claims
    pub ifr_claims: usize,
}

impl VillageAggregate {
    fn add(&mut self, claim: &Claim) {
        self.claim_count += 1;
        if claim.status.is_pending() {
            self.pending_claims += 1;
        }
        match claim.claim_type.value {
            ClaimType::Cfr => self.cfr_claims += 1,
            ClaimType::Ifr => self.ifr_claims += 1,
            ClaimType::Cr => {}
        }
    }
}

/// Summarize the claims linked to `village_name`
pub fn aggregate(village_name: &str, claims: &[Claim]) -> VillageAggregate {
    claims
        .iter()
        .filter(|claim| claim.is_linked_to(village_name))
        .fold(
            VillageAggregate {
                village: village_name.to_string(),
                ..Default::default()
            },
            |mut acc, claim| {
                acc.add(claim);
                acc
            },
        )
}

/// One aggregate per linked village, sorted by village name
///
/// Claims without a linked village are not counted anywhere.
pub fn aggregate_all(claims: &[Claim]) -> Vec<VillageAggregate> {
    let mut by_village: BTreeMap<&str, VillageAggregate> = BTreeMap::new();

    for claim in claims {
        if let Some(village) = claim.linked_village.as_deref() {
            by_village
                .entry(village)
                .or_insert_with(|| VillageAggregate {
                    village: village.to_string(),
                    ..Default::default()
                })
                .add(claim);
        }
    }

    by_village.into_values().collect()
}
