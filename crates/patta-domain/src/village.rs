//! Village module - gazetteer entries

use crate::claim::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gazetteer identifier for a village
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VillageId(pub String);

impl fmt::Display for VillageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Share of village land under each asset class, as percentages (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetCoverage {
    /// Water bodies
    pub water: f64,
    /// Forest cover
    pub forest: f64,
    /// Agricultural land
    pub agriculture: f64,
}

impl AssetCoverage {
    /// Create a coverage record
    pub fn new(water: f64, forest: f64, agriculture: f64) -> Self {
        Self {
            water,
            forest,
            agriculture,
        }
    }

    /// Copy with every percentage forced into [0, 100] (NaN becomes 0)
    ///
    /// Returns the clamped coverage and whether anything changed.
    pub fn clamped(&self) -> (Self, bool) {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) };
        let clamped = Self::new(clamp(self.water), clamp(self.forest), clamp(self.agriculture));
        let changed = clamped != *self;
        (clamped, changed)
    }
}

/// Rectangular extent of a village boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// South-west corner
    pub south_west: GeoPoint,
    /// North-east corner
    pub north_east: GeoPoint,
}

/// A gazetteer village
///
/// Geometry is carried for display only; nothing in the claim core reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    /// Gazetteer id
    pub id: VillageId,
    /// Canonical village name (claims link by this name)
    pub name: String,
    /// Asset coverage percentages
    pub asset_coverage: AssetCoverage,
    /// Map center
    #[serde(default)]
    pub center: GeoPoint,
    /// Boundary extent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_clamp() {
        let (clamped, changed) = AssetCoverage::new(-5.0, 120.0, f64::NAN).clamped();
        assert!(changed);
        assert_eq!(clamped, AssetCoverage::new(0.0, 100.0, 0.0));

        let (same, changed) = AssetCoverage::new(10.0, 65.0, 30.0).clamped();
        assert!(!changed);
        assert_eq!(same, AssetCoverage::new(10.0, 65.0, 30.0));
    }

    #[test]
    fn test_village_json_without_geometry() {
        let json = r#"{
            "id": "MH-NAG-014",
            "name": "Khairi",
            "asset_coverage": {"water": 10, "forest": 65, "agriculture": 30}
        }"#;
        let village: Village = serde_json::from_str(json).unwrap();
        assert_eq!(village.id, VillageId("MH-NAG-014".to_string()));
        assert_eq!(village.asset_coverage.forest, 65.0);
        assert!(village.bounds.is_none());
    }
}
