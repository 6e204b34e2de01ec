//! Counters for lifecycle operations

use patta_domain::ClaimStatus;
use std::collections::HashMap;

/// Metrics collected while claims move through the lifecycle
#[derive(Debug, Clone, Default)]
pub struct LifecycleMetrics {
    /// Claims taken in, by the status they entered with
    pub intakes: HashMap<ClaimStatus, usize>,

    /// Geo-link results attached to unlinked claims
    pub geo_links: usize,

    /// Completed reviews
    pub reviews: usize,

    /// Completed link actions
    pub links: usize,

    /// Manual field edits
    pub edits: usize,

    /// Operations rejected without changing the claim
    pub rejections: usize,
}

impl LifecycleMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intake
    pub fn record_intake(&mut self, status: ClaimStatus) {
        *self.intakes.entry(status).or_insert(0) += 1;
    }

    /// Record a geo-link attachment
    pub fn record_geo_link(&mut self) {
        self.geo_links += 1;
    }

    /// Record a review
    pub fn record_review(&mut self) {
        self.reviews += 1;
    }

    /// Record a link action
    pub fn record_link(&mut self) {
        self.links += 1;
    }

    /// Record a field edit
    pub fn record_edit(&mut self) {
        self.edits += 1;
    }

    /// Record a rejected operation
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    /// Total claims taken in
    pub fn total_intakes(&self) -> usize {
        self.intakes.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Lifecycle Metrics Summary".to_string(),
            "=========================".to_string(),
            format!("Intakes: {}", self.total_intakes()),
        ];

        for status in [
            ClaimStatus::Unlinked,
            ClaimStatus::NeedsReview,
            ClaimStatus::Linked,
        ] {
            if let Some(count) = self.intakes.get(&status) {
                lines.push(format!("  {}: {}", status, count));
            }
        }

        lines.push(format!("Geo-links attached: {}", self.geo_links));
        lines.push(format!("Reviews: {}", self.reviews));
        lines.push(format!("Links: {}", self.links));
        lines.push(format!("Edits: {}", self.edits));
        lines.push(format!("Rejected: {}", self.rejections));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_totals() {
        let mut metrics = LifecycleMetrics::new();
        metrics.record_intake(ClaimStatus::Linked);
        metrics.record_intake(ClaimStatus::NeedsReview);
        metrics.record_intake(ClaimStatus::NeedsReview);
        metrics.record_review();
        metrics.record_rejection();

        assert_eq!(metrics.total_intakes(), 3);
        assert_eq!(metrics.intakes[&ClaimStatus::NeedsReview], 2);
        assert_eq!(metrics.reviews, 1);
        assert_eq!(metrics.rejections, 1);
    }

    #[test]
    fn test_summary_and_reset() {
        let mut metrics = LifecycleMetrics::new();
        metrics.record_intake(ClaimStatus::Linked);
        metrics.record_edit();

        let summary = metrics.summary();
        assert!(summary.contains("Intakes: 1"));
        assert!(summary.contains("linked: 1"));
        assert!(summary.contains("Edits: 1"));

        metrics.reset();
        assert_eq!(metrics.total_intakes(), 0);
        assert_eq!(metrics.edits, 0);
    }
}
