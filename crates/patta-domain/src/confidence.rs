//! Confidence-annotated values produced by document extraction

use serde::{Deserialize, Serialize};

/// Confidence assigned to any value a person entered or confirmed by hand.
pub const MANUAL_CONFIDENCE: f64 = 1.0;

/// A value paired with the extractor's certainty about it
///
/// Confidence lives in [0.0, 1.0]. The type is immutable: every update
/// returns a new instance so that display layers can detect changes by
/// comparing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceField<T> {
    /// The extracted (or manually entered) value
    pub value: T,
    /// Certainty in [0.0, 1.0]
    pub confidence: f64,
}

impl<T> ConfidenceField<T> {
    /// Create a new field with the given confidence
    pub fn new(value: T, confidence: f64) -> Self {
        Self { value, confidence }
    }

    /// Create a field for a value entered by hand (confidence 1.0)
    pub fn manual(value: T) -> Self {
        Self::new(value, MANUAL_CONFIDENCE)
    }

    /// Return a new field holding `value` at `confidence`
    pub fn with_confidence(&self, value: T, confidence: f64) -> Self {
        Self::new(value, confidence)
    }

    /// Check whether the confidence reaches `threshold`
    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

impl<T: Clone> ConfidenceField<T> {
    /// Same value, confirmed by a reviewer (confidence 1.0)
    pub fn confirmed(&self) -> Self {
        Self::manual(self.value.clone())
    }

    /// Copy with the confidence forced into [0.0, 1.0]
    ///
    /// NaN becomes 0.0. Out-of-range scores come from a misbehaving
    /// extractor; they are logged rather than raised.
    pub fn clamped(&self) -> Self {
        let confidence = clamp_confidence(self.confidence);
        if confidence != self.confidence {
            tracing::warn!(
                original = self.confidence,
                clamped = confidence,
                "Confidence outside [0, 1] clamped"
            );
        }
        Self::new(self.value.clone(), confidence)
    }
}

/// Force a raw confidence score into [0.0, 1.0] (NaN maps to 0.0)
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
