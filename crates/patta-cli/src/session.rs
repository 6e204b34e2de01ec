//! State shared by the commands of one CLI invocation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use patta_dss::{Advisor, RecommendationEngine};
use patta_lifecycle::ClaimLifecycle;
use patta_store::{ClaimLedger, Gazetteer};
use std::path::PathBuf;

/// One invocation's claims, collaborators and output settings.
///
/// The ledger is loaded once at startup and written back only by commands
/// that changed it.
pub struct Session {
    /// Claims loaded from the snapshot
    pub ledger: ClaimLedger,
    /// Lifecycle configured from `[lifecycle]`
    pub lifecycle: ClaimLifecycle,
    /// Output formatter
    pub formatter: Formatter,
    engine: RecommendationEngine,
    claims_path: PathBuf,
    villages_path: PathBuf,
}

impl Session {
    /// Open a session over explicit snapshot and gazetteer paths.
    pub fn open(
        config: &Config,
        claims_path: PathBuf,
        villages_path: PathBuf,
        formatter: Formatter,
    ) -> Result<Self> {
        let ledger = ClaimLedger::load(&claims_path)?;
        Ok(Self {
            ledger,
            lifecycle: ClaimLifecycle::new(config.lifecycle.clone()),
            formatter,
            engine: RecommendationEngine::new(config.engine.clone()),
            claims_path,
            villages_path,
        })
    }

    /// Load the gazetteer; unlike the claim snapshot it must exist.
    pub fn gazetteer(&self) -> Result<Gazetteer> {
        Ok(Gazetteer::load(&self.villages_path)?)
    }

    /// Recommendation engine configured from `[engine]`
    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Advisor over the configured engine
    pub fn advisor(&self) -> Advisor {
        Advisor::new(self.engine.clone())
    }

    /// Write the ledger back to its snapshot.
    pub fn save(&self) -> Result<()> {
        self.ledger.save(&self.claims_path)?;
        Ok(())
    }
}
