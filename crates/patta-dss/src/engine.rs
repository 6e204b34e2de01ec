//! Recommendation engine

use crate::rules::{Rule, RuleInput, RULE_TABLE};
use crate::{EngineConfig, VillageAggregate};
use patta_domain::{AssetCoverage, DssRecommendation};

/// Evaluates the rule table against village data
///
/// # Examples
///
/// ```
/// use patta_dss::{RecommendationEngine, VillageAggregate};
/// use patta_domain::AssetCoverage;
///
/// let engine = RecommendationEngine::default_config();
/// let aggregate = VillageAggregate {
///     village: "Khairi".to_string(),
///     claim_count: 12,
///     pending_claims: 6,
///     cfr_claims: 2,
///     ifr_claims: 4,
/// };
///
/// let recs = engine.recommend(&aggregate, &AssetCoverage::new(10.0, 65.0, 30.0));
/// assert_eq!(recs[0].rule_id, "water-scarcity");
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<Rule>,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine over the standard rule table
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rules(RULE_TABLE.to_vec(), config)
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Create an engine over a custom rule table (order is the tie-break)
    pub fn with_rules(rules: Vec<Rule>, config: EngineConfig) -> Self {
        Self { rules, config }
    }

    /// The rules in table order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Recommendations for a village, highest priority first
    ///
    /// Equal priorities keep table order. An empty result means no rule
    /// fired. Coverage outside 0-100 is clamped and logged.
    pub fn recommend(
        &self,
        aggregate: &VillageAggregate,
        coverage: &AssetCoverage,
    ) -> Vec<DssRecommendation> {
        let (coverage, clamped) = coverage.clamped();
        if clamped {
            tracing::warn!(village = %aggregate.village, "Asset coverage outside 0-100 clamped");
        }

        let input = RuleInput::new(aggregate, &coverage);
        let mut matches: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| {
                let fired = rule.matches(&input);
                tracing::debug!(rule = rule.id, fired, "Rule evaluated");
                fired
            })
            .collect();

        // sort_by is stable: equal priorities stay in table order
        matches.sort_by(|a, b| b.priority.cmp(&a.priority));

        tracing::info!(
            village = %aggregate.village,
            matched = matches.len(),
            "Recommendations computed"
        );

        matches
            .into_iter()
            .map(|rule| self.to_recommendation(rule))
            .collect()
    }

    fn to_recommendation(&self, rule: &Rule) -> DssRecommendation {
        let recommendation = if self.config.annotate_priority {
            format!("{} (Priority: {})", rule.name, rule.priority)
        } else {
            rule.name.to_string()
        };

        DssRecommendation {
            rule_id: rule.id.to_string(),
            recommendation,
            justification: rule.justification.to_string(),
            priority: rule.priority,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
