//! Village advice: gazetteer lookup, aggregation and recommendation in one call

use crate::{aggregate, DssError, RecommendationEngine, VillageAggregate};
use patta_domain::traits::VillageRegistry;
use patta_domain::{Claim, DssRecommendation, Village};
use serde::Serialize;

/// Decision support for one village
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    /// The gazetteer village
    pub village: Village,
    /// Claim counts for the village
    pub aggregate: VillageAggregate,
    /// Recommendations, highest priority first
    pub recommendations: Vec<DssRecommendation>,
}

/// Produces [`Advice`] for gazetteer villages
pub struct Advisor {
    engine: RecommendationEngine,
}

impl Advisor {
    /// Create an advisor around an engine
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }

    /// The underlying engine
    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Aggregate a village's claims and recommend actions
    ///
    /// Fails with [`DssError::VillageNotFound`] when the village is not in
    /// the registry.
    pub fn advise<R: VillageRegistry>(
        &self,
        village_name: &str,
        claims: &[Claim],
        registry: &R,
    ) -> Result<Advice, DssError>
    where
        R::Error: std::fmt::Display,
    {
        let village = registry
            .find_by_name(village_name)
            .map_err(|e| DssError::Registry(format!("Failed to look up village: {}", e)))?
            .ok_or_else(|| DssError::VillageNotFound(village_name.to_string()))?;

        let aggregate = aggregate(&village.name, claims);
        let recommendations = self.engine.recommend(&aggregate, &village.asset_coverage);

        Ok(Advice {
            village,
            aggregate,
            recommendations,
        })
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(RecommendationEngine::default_config())
    }
}
