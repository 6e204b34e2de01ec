//! Review queue ordering

use patta_domain::{Claim, ClaimStatus};

/// Claims awaiting review, least certain first
///
/// Ties on minimum confidence are broken by claim id (intake order).
pub fn review_queue(claims: &[Claim]) -> Vec<&Claim> {
    let mut queue: Vec<&Claim> = claims
        .iter()
        .filter(|claim| claim.status == ClaimStatus::NeedsReview)
        .collect();

    queue.sort_by(|a, b| {
        a.min_confidence()
            .total_cmp(&b.min_confidence())
            .then_with(|| a.id.cmp(&b.id))
    });
    queue
}
