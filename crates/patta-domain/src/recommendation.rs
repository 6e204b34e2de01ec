//! Decision-support output records

use serde::{Deserialize, Serialize};

/// One recommendation produced by the decision-support rule table
///
/// Built fresh for every query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DssRecommendation {
    /// Id of the rule that fired
    pub rule_id: String,
    /// What to do
    pub recommendation: String,
    /// Why the rule fired
    pub justification: String,
    /// Higher runs first
    pub priority: i32,
}
