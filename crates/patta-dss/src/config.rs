//! Recommendation engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for the recommendation engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Append "(Priority: N)" to each recommendation text
    #[serde(default)]
    pub annotate_priority: bool,
}

impl EngineConfig {
    /// Configuration that embeds the priority in recommendation text
    pub fn annotated() -> Self {
        Self {
            annotate_priority: true,
        }
    }
}
