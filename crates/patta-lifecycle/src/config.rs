//! Configuration for the claim lifecycle

use crate::LifecycleError;
use serde::{Deserialize, Serialize};

/// Confidence a claim must reach on every field (and on its geo-link) to skip review
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 0.8;

/// Configuration for the claim lifecycle
///
/// # Examples
///
/// ```
/// use patta_lifecycle::LifecycleConfig;
///
/// let config = LifecycleConfig::default();
/// assert_eq!(config.review_threshold, 0.8);
///
/// let config = LifecycleConfig::strict();
/// assert_eq!(config.review_threshold, 0.9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Minimum confidence for a claim to enter as `linked` without review
    #[serde(default = "default_review_threshold")]
    pub review_threshold: f64,
}

fn default_review_threshold() -> f64 {
    DEFAULT_REVIEW_THRESHOLD
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            review_threshold: DEFAULT_REVIEW_THRESHOLD,
        }
    }
}

impl LifecycleConfig {
    /// Send more claims to review
    pub fn strict() -> Self {
        Self {
            review_threshold: 0.9,
        }
    }

    /// Trust the extractor more
    pub fn lenient() -> Self {
        Self {
            review_threshold: 0.6,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if !(0.0..=1.0).contains(&self.review_threshold) {
            return Err(LifecycleError::Config(format!(
                "review_threshold {} is outside [0.0, 1.0]",
                self.review_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(LifecycleConfig::default().review_threshold, 0.8);
        assert!(LifecycleConfig::strict().review_threshold > LifecycleConfig::default().review_threshold);
        assert!(LifecycleConfig::lenient().review_threshold < LifecycleConfig::default().review_threshold);
    }

    #[test]
    fn test_validate() {
        assert!(LifecycleConfig::default().validate().is_ok());
        let config = LifecycleConfig { review_threshold: 1.5 };
        assert!(matches!(config.validate(), Err(LifecycleError::Config(_))));
        let config = LifecycleConfig { review_threshold: f64::NAN };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let config: LifecycleConfig = toml::from_str("").unwrap();
        assert_eq!(config, LifecycleConfig::default());

        let config: LifecycleConfig = toml::from_str("review_threshold = 0.75").unwrap();
        assert_eq!(config.review_threshold, 0.75);
    }
}
