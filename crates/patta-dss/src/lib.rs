//! Patta Decision Support
//!
//! Rule-based recommendations for villages with forest-rights claims.
//!
//! The decision-support layer provides:
//! - Per-village claim aggregation
//! - A fixed, ordered rule table of predicate → recommendation mappings
//! - A recommendation engine that sorts matches by priority, ties in table order
//! - An advisor that resolves the village in the gazetteer first
//!
//! Everything here is pure and synchronous.

#![warn(missing_docs)]

mod advisor;
mod aggregate;
mod config;
mod engine;
mod error;
pub mod rules;

pub use advisor::{Advice, Advisor};
pub use aggregate::{aggregate, aggregate_all, VillageAggregate};
pub use config::EngineConfig;
pub use engine::RecommendationEngine;
pub use error::DssError;
pub use rules::{Rule, RuleInput, RULE_TABLE};
