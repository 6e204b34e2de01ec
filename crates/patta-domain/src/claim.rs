//! Claim module - a forest-rights claim and its review status

use crate::confidence::ConfidenceField;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier for a claim based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, so listing claims by
/// id also lists them in intake order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Generate a new UUIDv7-based ClaimId
    ///
    /// # Examples
    ///
    /// ```
    /// use patta_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ClaimId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ClaimId from its hyphenated UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use patta_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// let parsed = ClaimId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid claim id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ClaimId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClaimId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClaimId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Forest-rights claim category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimType {
    /// Individual Forest Rights
    Ifr,
    /// Community Forest Rights
    Cfr,
    /// Community (Forest) Resource rights
    Cr,
}

impl ClaimType {
    /// Get the claim type code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Ifr => "IFR",
            ClaimType::Cfr => "CFR",
            ClaimType::Cr => "CR",
        }
    }

    /// Parse a claim type code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "IFR" => Some(ClaimType::Ifr),
            "CFR" => Some(ClaimType::Cfr),
            "CR" => Some(ClaimType::Cr),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim type: {}", s))
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of a claim
///
/// - Unlinked: extracted, geo-linking has not run yet
/// - NeedsReview: low confidence or no village match; waiting for a reviewer
/// - Reviewed: confirmed by a reviewer, waiting to be placed on the map
/// - Linked: steady display state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimStatus {
    /// Geo-linking has not run
    Unlinked,
    /// Awaiting manual review
    NeedsReview,
    /// Linked to a village and shown on the map
    Linked,
    /// Reviewed, awaiting the explicit link action
    Reviewed,
}

impl ClaimStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Unlinked => "unlinked",
            ClaimStatus::NeedsReview => "needs-review",
            ClaimStatus::Linked => "linked",
            ClaimStatus::Reviewed => "reviewed",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "unlinked" => Some(ClaimStatus::Unlinked),
            "needs-review" => Some(ClaimStatus::NeedsReview),
            "linked" => Some(ClaimStatus::Linked),
            "reviewed" => Some(ClaimStatus::Reviewed),
            _ => None,
        }
    }

    /// Pending claims still need attention before they can be displayed
    pub fn is_pending(&self) -> bool {
        matches!(self, ClaimStatus::Unlinked | ClaimStatus::NeedsReview)
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim status: {}", s))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the map
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// The extracted fields of a claim, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    /// Name of the claimant
    ClaimantName,
    /// Village as written on the document
    Village,
    /// IFR / CFR / CR
    ClaimType,
    /// Claimed area
    Area,
    /// Claim date
    Date,
}

impl ClaimField {
    /// All fields in display order
    pub const ALL: [ClaimField; 5] = [
        ClaimField::ClaimantName,
        ClaimField::Village,
        ClaimField::ClaimType,
        ClaimField::Area,
        ClaimField::Date,
    ];

    /// Field name as used in records and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "claimant_name",
            ClaimField::Village => "village",
            ClaimField::ClaimType => "claim_type",
            ClaimField::Area => "area",
            ClaimField::Date => "date",
        }
    }

    /// Parse a field name; accepts snake_case, kebab-case and camelCase
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "claimantname" | "claimant" | "name" => Some(ClaimField::ClaimantName),
            "village" => Some(ClaimField::Village),
            "claimtype" | "type" => Some(ClaimField::ClaimType),
            "area" => Some(ClaimField::Area),
            "date" => Some(ClaimField::Date),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClaimField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown claim field: {}", s))
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A forest-rights claim
///
/// Every extracted attribute carries its own confidence. Claims are treated
/// as immutable values: lifecycle operations return an updated copy which the
/// owning collection stores in place of the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// Name of the claimant
    pub claimant_name: ConfidenceField<String>,

    /// Village as written on the claim document
    pub village: ConfidenceField<String>,

    /// Claim category
    pub claim_type: ConfidenceField<ClaimType>,

    /// Claimed area, as written (e.g. "2.5 ha")
    pub area: ConfidenceField<String>,

    /// Claim date, as written
    pub date: ConfidenceField<String>,

    /// Gazetteer village this claim was matched to, if any
    pub linked_village: Option<String>,

    /// Confidence of the geo-link match
    pub geo_link_confidence: f64,

    /// Review status
    pub status: ClaimStatus,

    /// Plot location
    #[serde(default)]
    pub location: GeoPoint,

    /// When the claim was taken in (unix seconds)
    #[serde(default)]
    pub created_at: u64,
}

impl Claim {
    /// Confidence of every extracted field, in [`ClaimField::ALL`] order
    pub fn field_confidences(&self) -> [f64; 5] {
        [
            self.claimant_name.confidence,
            self.village.confidence,
            self.claim_type.confidence,
            self.area.confidence,
            self.date.confidence,
        ]
    }

    /// Lowest confidence across the extracted fields and the geo-link
    pub fn min_confidence(&self) -> f64 {
        self.field_confidences()
            .into_iter()
            .fold(self.geo_link_confidence, f64::min)
    }

    /// Text value of a field
    pub fn field_value(&self, field: ClaimField) -> String {
        match field {
            ClaimField::ClaimantName => self.claimant_name.value.clone(),
            ClaimField::Village => self.village.value.clone(),
            ClaimField::ClaimType => self.claim_type.value.to_string(),
            ClaimField::Area => self.area.value.clone(),
            ClaimField::Date => self.date.value.clone(),
        }
    }

    /// Whether this claim references the given gazetteer village
    pub fn is_linked_to(&self, village_name: &str) -> bool {
        self.linked_village.as_deref() == Some(village_name)
    }
}
