//! Confidence gate deciding where a freshly linked claim starts

use patta_domain::{Claim, ClaimStatus};

/// Decides between `linked` and `needs-review` once geo-linking has run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceGate {
    threshold: f64,
}

impl ConfidenceGate {
    /// Create a gate with the given review threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The review threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Status a claim should enter with
    ///
    /// A claim with no village match, or whose lowest confidence (fields and
    /// geo-link together) is below the threshold, needs review.
    pub fn evaluate(&self, claim: &Claim) -> ClaimStatus {
        let matched = claim
            .linked_village
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        if !matched || claim.min_confidence() < self.threshold {
            ClaimStatus::NeedsReview
        } else {
            ClaimStatus::Linked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patta_domain::{ClaimId, ClaimType, ConfidenceField, GeoPoint};

    fn claim(field_confidence: f64, geo_confidence: f64, linked: Option<&str>) -> Claim {
        Claim {
            id: ClaimId::from_value(7),
            claimant_name: ConfidenceField::new("Mangal Singh".to_string(), field_confidence),
            village: ConfidenceField::new("Devgaon".to_string(), 0.9),
            claim_type: ConfidenceField::new(ClaimType::Cfr, 0.9),
            area: ConfidenceField::new("12 ha".to_string(), 0.9),
            date: ConfidenceField::new("2019-11-02".to_string(), 0.9),
            linked_village: linked.map(str::to_string),
            geo_link_confidence: geo_confidence,
            status: ClaimStatus::Unlinked,
            location: GeoPoint::default(),
            created_at: 0,
        }
    }

    #[test]
    fn test_confident_match_links() {
        let gate = ConfidenceGate::new(0.8);
        assert_eq!(gate.evaluate(&claim(0.8, 0.95, Some("Devgaon"))), ClaimStatus::Linked);
    }

    #[test]
    fn test_low_field_confidence_needs_review() {
        let gate = ConfidenceGate::new(0.8);
        assert_eq!(gate.evaluate(&claim(0.5, 0.95, Some("Devgaon"))), ClaimStatus::NeedsReview);
    }

    #[test]
    fn test_low_geo_confidence_needs_review() {
        let gate = ConfidenceGate::new(0.8);
        assert_eq!(gate.evaluate(&claim(0.9, 0.79, Some("Devgaon"))), ClaimStatus::NeedsReview);
    }

    #[test]
    fn test_no_match_needs_review() {
        let gate = ConfidenceGate::new(0.8);
        assert_eq!(gate.evaluate(&claim(1.0, 1.0, None)), ClaimStatus::NeedsReview);
        assert_eq!(gate.evaluate(&claim(1.0, 1.0, Some("  "))), ClaimStatus::NeedsReview);
    }
}
