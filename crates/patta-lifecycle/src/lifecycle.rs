//! Claim lifecycle state machine
//!
//! ```text
//!   intake ──(no geo-link yet)──▶ unlinked ──attach_geo_link──┐
//!      │                                                      ▼
//!      └──(gate)──▶ needs-review ──review──▶ reviewed ──link──▶ linked
//!                        ▲                                     ▲
//!                        └───────────────(gate)────────────────┘
//! ```
//!
//! `edit` is allowed in every state and never changes the status.

use crate::{ConfidenceGate, LifecycleConfig, LifecycleError, LifecycleMetrics};
use patta_domain::confidence::clamp_confidence;
use patta_domain::{
    Claim, ClaimField, ClaimId, ClaimStatus, ClaimType, ConfidenceField, GeoPoint,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Lifecycle actions, used to report rejected transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attach a geo-link result to an unlinked claim
    AttachGeoLink,
    /// Reviewer confirms the claim
    Review,
    /// Reviewer places a reviewed claim on the map
    Link,
    /// Manual edit of one field
    Edit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::AttachGeoLink => "attach a geo-link to",
            Action::Review => "review",
            Action::Link => "link",
            Action::Edit => "edit",
        };
        f.write_str(name)
    }
}

/// Result of matching a claim's village against the gazetteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLink {
    /// Matched gazetteer village; `None` when nothing matched
    #[serde(default, alias = "linkedVillageName")]
    pub linked_village_name: Option<String>,

    /// Match confidence in [0, 1]
    #[serde(alias = "confidenceScore")]
    pub confidence_score: f64,
}

/// Structured fields returned by the extraction collaborator for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Name of the claimant
    #[serde(alias = "claimantName")]
    pub claimant_name: ConfidenceField<String>,
    /// Village as written
    pub village: ConfidenceField<String>,
    /// IFR / CFR / CR
    #[serde(alias = "claimType")]
    pub claim_type: ConfidenceField<ClaimType>,
    /// Claimed area
    pub area: ConfidenceField<String>,
    /// Claim date
    pub date: ConfidenceField<String>,
    /// Geo-link result, absent when linking has not run
    #[serde(default, alias = "geoLink")]
    pub geo_link: Option<GeoLink>,
    /// Plot location
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Corrections a reviewer makes while reviewing a claim
///
/// Unset fields keep their extracted values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewEdits {
    /// Corrected claimant name
    pub claimant_name: Option<String>,
    /// Corrected village as written
    pub village: Option<String>,
    /// Corrected claim type
    pub claim_type: Option<ClaimType>,
    /// Corrected area
    pub area: Option<String>,
    /// Corrected date
    pub date: Option<String>,
    /// Gazetteer village chosen by the reviewer
    pub linked_village: Option<String>,
}

/// Drives claims through their review states
///
/// Every operation takes the current claim by reference and returns the
/// updated claim; the caller stores it back by id. A rejected operation
/// returns an error and leaves the input untouched.
///
/// # Examples
///
/// ```
/// use patta_lifecycle::{ClaimLifecycle, ExtractionRecord, GeoLink, ReviewEdits};
/// use patta_domain::{ClaimStatus, ClaimType, ConfidenceField};
///
/// let mut lifecycle = ClaimLifecycle::default_config();
/// let record = ExtractionRecord {
///     claimant_name: ConfidenceField::new("Sunita Bai".to_string(), 0.95),
///     village: ConfidenceField::new("Khairi".to_string(), 0.5),
///     claim_type: ConfidenceField::new(ClaimType::Ifr, 0.9),
///     area: ConfidenceField::new("1.2 ha".to_string(), 0.9),
///     date: ConfidenceField::new("2021-03-14".to_string(), 0.9),
///     geo_link: Some(GeoLink {
///         linked_village_name: Some("Khairi Kalan".to_string()),
///         confidence_score: 0.95,
///     }),
///     location: None,
/// };
///
/// let claim = lifecycle.intake(record).unwrap();
/// assert_eq!(claim.status, ClaimStatus::NeedsReview);
///
/// let claim = lifecycle.review(&claim, &ReviewEdits::default()).unwrap();
/// assert_eq!(claim.status, ClaimStatus::Reviewed);
/// assert_eq!(claim.village.value, "Khairi Kalan");
///
/// let claim = lifecycle.link(&claim).unwrap();
/// assert_eq!(claim.status, ClaimStatus::Linked);
/// ```
pub struct ClaimLifecycle {
    config: LifecycleConfig,
    gate: ConfidenceGate,
    metrics: LifecycleMetrics,
}

impl ClaimLifecycle {
    /// Create a lifecycle with the given configuration
    pub fn new(config: LifecycleConfig) -> Self {
        let gate = ConfidenceGate::new(config.review_threshold);
        Self {
            config,
            gate,
            metrics: LifecycleMetrics::new(),
        }
    }

    /// Create a lifecycle with default configuration
    pub fn default_config() -> Self {
        Self::new(LifecycleConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &LifecycleMetrics {
        &self.metrics
    }

    /// Create a claim from an extraction record
    ///
    /// Without a geo-link the claim enters as `unlinked`; otherwise the
    /// confidence gate decides between `needs-review` and `linked`.
    /// Out-of-range confidences are clamped and logged.
    pub fn intake(&mut self, record: ExtractionRecord) -> Result<Claim, LifecycleError> {
        let result = self.build_claim(record);
        match &result {
            Ok(claim) => {
                self.metrics.record_intake(claim.status);
                tracing::info!(
                    claim_id = %claim.id,
                    status = %claim.status,
                    min_confidence = claim.min_confidence(),
                    "Claim taken in"
                );
            }
            Err(e) => self.reject("intake", e),
        }
        result
    }

    fn build_claim(&self, record: ExtractionRecord) -> Result<Claim, LifecycleError> {
        let claimant_name = trimmed_field(ClaimField::ClaimantName, &record.claimant_name)?;
        let village = trimmed_field(ClaimField::Village, &record.village)?;
        let area = trimmed_field(ClaimField::Area, &record.area)?;
        let date = trimmed_field(ClaimField::Date, &record.date)?;

        let claim = Claim {
            id: ClaimId::new(),
            claimant_name,
            village,
            claim_type: record.claim_type.clamped(),
            area,
            date,
            linked_village: None,
            geo_link_confidence: 0.0,
            status: ClaimStatus::Unlinked,
            location: record.location.unwrap_or_default(),
            created_at: current_timestamp(),
        };

        Ok(match record.geo_link {
            Some(geo_link) => self.apply_geo_link(claim, &geo_link),
            None => claim,
        })
    }

    /// Attach a geo-link result to an `unlinked` claim and run the gate
    pub fn attach_geo_link(
        &mut self,
        claim: &Claim,
        geo_link: &GeoLink,
    ) -> Result<Claim, LifecycleError> {
        self.check_status(claim, ClaimStatus::Unlinked, Action::AttachGeoLink)?;

        let updated = self.apply_geo_link(claim.clone(), geo_link);
        self.metrics.record_geo_link();
        log_transition(claim, &updated);
        Ok(updated)
    }

    fn apply_geo_link(&self, mut claim: Claim, geo_link: &GeoLink) -> Claim {
        let confidence = clamp_confidence(geo_link.confidence_score);
        if confidence != geo_link.confidence_score {
            tracing::warn!(
                original = geo_link.confidence_score,
                clamped = confidence,
                "Geo-link confidence outside [0, 1] clamped"
            );
        }

        claim.linked_village = geo_link
            .linked_village_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        claim.geo_link_confidence = confidence;
        claim.status = self.gate.evaluate(&claim);
        claim
    }

    /// Review and save a `needs-review` claim
    ///
    /// Reviewer edits are applied first. Every field is then treated as
    /// ground truth (confidence 1.0), and the written village is replaced by
    /// the linked gazetteer village when there is one.
    pub fn review(&mut self, claim: &Claim, edits: &ReviewEdits) -> Result<Claim, LifecycleError> {
        self.check_status(claim, ClaimStatus::NeedsReview, Action::Review)?;

        let result = reviewed_copy(claim, edits);
        match &result {
            Ok(updated) => {
                self.metrics.record_review();
                log_transition(claim, updated);
            }
            Err(e) => self.reject("review", e),
        }
        result
    }

    /// Place a `reviewed` claim on the map
    pub fn link(&mut self, claim: &Claim) -> Result<Claim, LifecycleError> {
        self.check_status(claim, ClaimStatus::Reviewed, Action::Link)?;

        if claim.linked_village.is_none() {
            let e = LifecycleError::MissingField("linked_village".to_string());
            self.reject("link", &e);
            return Err(e);
        }

        let mut updated = claim.clone();
        updated.status = ClaimStatus::Linked;
        self.metrics.record_link();
        log_transition(claim, &updated);
        Ok(updated)
    }

    /// Manually edit one field
    ///
    /// The field's confidence becomes 1.0. The status never changes.
    pub fn edit(
        &mut self,
        claim: &Claim,
        field: ClaimField,
        value: &str,
    ) -> Result<Claim, LifecycleError> {
        let result = edited_copy(claim, field, value);
        match &result {
            Ok(_) => {
                self.metrics.record_edit();
                tracing::info!(claim_id = %claim.id, field = %field, "Claim field edited");
            }
            Err(e) => self.reject("edit", e),
        }
        result
    }

    fn check_status(
        &mut self,
        claim: &Claim,
        expected: ClaimStatus,
        action: Action,
    ) -> Result<(), LifecycleError> {
        if claim.status == expected {
            return Ok(());
        }
        let e = LifecycleError::InvalidTransition {
            from: claim.status,
            action,
        };
        tracing::warn!(claim_id = %claim.id, error = %e, "Transition rejected");
        self.metrics.record_rejection();
        Err(e)
    }

    fn reject(&mut self, operation: &str, error: &LifecycleError) {
        tracing::warn!(operation, error = %error, "Lifecycle operation rejected");
        self.metrics.record_rejection();
    }
}

fn log_transition(before: &Claim, after: &Claim) {
    tracing::info!(
        claim_id = %after.id,
        from = %before.status,
        to = %after.status,
        "Claim transitioned"
    );
}

fn require_text(field: ClaimField, value: &str) -> Result<String, LifecycleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LifecycleError::MissingField(field.to_string()));
    }
    Ok(trimmed.to_string())
}

fn trimmed_field(
    field: ClaimField,
    extracted: &ConfidenceField<String>,
) -> Result<ConfidenceField<String>, LifecycleError> {
    let text = require_text(field, &extracted.value)?;
    Ok(extracted.with_confidence(text, extracted.confidence).clamped())
}

fn reviewed_copy(claim: &Claim, edits: &ReviewEdits) -> Result<Claim, LifecycleError> {
    let mut updated = claim.clone();

    if let Some(name) = &edits.claimant_name {
        updated.claimant_name.value = require_text(ClaimField::ClaimantName, name)?;
    }
    if let Some(village) = &edits.village {
        updated.village.value = require_text(ClaimField::Village, village)?;
    }
    if let Some(claim_type) = edits.claim_type {
        updated.claim_type.value = claim_type;
    }
    if let Some(area) = &edits.area {
        updated.area.value = require_text(ClaimField::Area, area)?;
    }
    if let Some(date) = &edits.date {
        updated.date.value = require_text(ClaimField::Date, date)?;
    }
    if let Some(linked) = &edits.linked_village {
        let linked = require_text(ClaimField::Village, linked)
            .map_err(|_| LifecycleError::MissingField("linked_village".to_string()))?;
        updated.linked_village = Some(linked);
    }

    if let Some(linked) = &updated.linked_village {
        updated.village.value = linked.clone();
        updated.geo_link_confidence = 1.0;
    }

    updated.claimant_name = updated.claimant_name.confirmed();
    updated.village = updated.village.confirmed();
    updated.claim_type = updated.claim_type.confirmed();
    updated.area = updated.area.confirmed();
    updated.date = updated.date.confirmed();
    updated.status = ClaimStatus::Reviewed;

    Ok(updated)
}

fn edited_copy(claim: &Claim, field: ClaimField, value: &str) -> Result<Claim, LifecycleError> {
    let text = require_text(field, value)?;
    let mut updated = claim.clone();

    match field {
        ClaimField::ClaimantName => updated.claimant_name = ConfidenceField::manual(text),
        ClaimField::Village => updated.village = ConfidenceField::manual(text),
        ClaimField::Area => updated.area = ConfidenceField::manual(text),
        ClaimField::Date => updated.date = ConfidenceField::manual(text),
        ClaimField::ClaimType => {
            let claim_type = ClaimType::parse(&text).ok_or_else(|| LifecycleError::InvalidValue {
                field: field.to_string(),
                value: text.clone(),
            })?;
            updated.claim_type = ConfidenceField::manual(claim_type);
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(field_confidence: f64, geo_link: Option<GeoLink>) -> ExtractionRecord {
        ExtractionRecord {
            claimant_name: ConfidenceField::new("Ramesh Korku".to_string(), field_confidence),
            village: ConfidenceField::new("Khari".to_string(), 0.9),
            claim_type: ConfidenceField::new(ClaimType::Ifr, 0.92),
            area: ConfidenceField::new("2.0 ha".to_string(), 0.88),
            date: ConfidenceField::new("2020-06-01".to_string(), 0.9),
            geo_link,
            location: Some(GeoPoint { lat: 21.2, lng: 79.1 }),
        }
    }

    fn matched(name: &str, confidence: f64) -> Option<GeoLink> {
        Some(GeoLink {
            linked_village_name: Some(name.to_string()),
            confidence_score: confidence,
        })
    }

    #[test]
    fn test_intake_confident_claim_links() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.95, matched("Khairi", 0.95))).unwrap();

        assert_eq!(claim.status, ClaimStatus::Linked);
        assert_eq!(claim.linked_village.as_deref(), Some("Khairi"));
        assert_eq!(lifecycle.metrics().intakes[&ClaimStatus::Linked], 1);
    }

    #[test]
    fn test_intake_low_confidence_needs_review() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.5, matched("Khairi", 0.95))).unwrap();
        assert_eq!(claim.status, ClaimStatus::NeedsReview);
    }

    #[test]
    fn test_intake_without_match_needs_review() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let geo = Some(GeoLink {
            linked_village_name: None,
            confidence_score: 0.0,
        });
        let claim = lifecycle.intake(record(0.99, geo)).unwrap();
        assert_eq!(claim.status, ClaimStatus::NeedsReview);
        assert!(claim.linked_village.is_none());
    }

    #[test]
    fn test_intake_without_geo_link_is_unlinked() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.99, None)).unwrap();
        assert_eq!(claim.status, ClaimStatus::Unlinked);
    }

    #[test]
    fn test_intake_trims_text_fields() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let mut rec = record(0.9, None);
        rec.claimant_name.value = "  Sunita Bai ".to_string();
        rec.date.value = "2021-03-14\n".to_string();

        let claim = lifecycle.intake(rec).unwrap();
        assert_eq!(claim.claimant_name.value, "Sunita Bai");
        assert_eq!(claim.claimant_name.confidence, 0.9);
        assert_eq!(claim.date.value, "2021-03-14");

        let edited = lifecycle
            .edit(&claim, ClaimField::ClaimantName, "  Sunita Bai ")
            .unwrap();
        assert_eq!(edited.claimant_name.value, claim.claimant_name.value);
    }

    #[test]
    fn test_intake_rejects_empty_field() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let mut rec = record(0.9, None);
        rec.claimant_name.value = "   ".to_string();

        let err = lifecycle.intake(rec).unwrap_err();
        assert_eq!(err, LifecycleError::MissingField("claimant_name".to_string()));
        assert_eq!(lifecycle.metrics().rejections, 1);
        assert_eq!(lifecycle.metrics().total_intakes(), 0);
    }

    #[test]
    fn test_intake_clamps_confidence() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(1.4, matched("Khairi", -0.3))).unwrap();
        assert_eq!(claim.claimant_name.confidence, 1.0);
        assert_eq!(claim.geo_link_confidence, 0.0);
        assert_eq!(claim.status, ClaimStatus::NeedsReview);
    }

    #[test]
    fn test_attach_geo_link_only_from_unlinked() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let unlinked = lifecycle.intake(record(0.9, None)).unwrap();

        let geo = GeoLink {
            linked_village_name: Some("Khairi".to_string()),
            confidence_score: 0.9,
        };
        let linked = lifecycle.attach_geo_link(&unlinked, &geo).unwrap();
        assert_eq!(linked.status, ClaimStatus::Linked);

        let err = lifecycle.attach_geo_link(&linked, &geo).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidTransition {
                from: ClaimStatus::Linked,
                action: Action::AttachGeoLink
            }
        ));
    }

    #[test]
    fn test_review_confirms_every_field() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.3, matched("Khairi", 0.6))).unwrap();
        let reviewed = lifecycle.review(&claim, &ReviewEdits::default()).unwrap();

        assert_eq!(reviewed.status, ClaimStatus::Reviewed);
        assert!(reviewed.field_confidences().iter().all(|c| *c == 1.0));
        assert_eq!(reviewed.village.value, "Khairi");
        assert_eq!(reviewed.claimant_name.value, "Ramesh Korku");
        assert_eq!(lifecycle.metrics().reviews, 1);
    }

    #[test]
    fn test_review_applies_edits() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.3, matched("Khairi", 0.6))).unwrap();
        let edits = ReviewEdits {
            claimant_name: Some("Ramesh Korku Uikey".to_string()),
            claim_type: Some(ClaimType::Cfr),
            linked_village: Some("Khairi Kalan".to_string()),
            ..Default::default()
        };

        let reviewed = lifecycle.review(&claim, &edits).unwrap();
        assert_eq!(reviewed.claimant_name.value, "Ramesh Korku Uikey");
        assert_eq!(reviewed.claim_type.value, ClaimType::Cfr);
        assert_eq!(reviewed.linked_village.as_deref(), Some("Khairi Kalan"));
        assert_eq!(reviewed.village.value, "Khairi Kalan");
        assert_eq!(reviewed.geo_link_confidence, 1.0);
    }

    #[test]
    fn test_review_without_link_keeps_written_village() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let geo = Some(GeoLink {
            linked_village_name: None,
            confidence_score: 0.2,
        });
        let claim = lifecycle.intake(record(0.9, geo)).unwrap();
        let reviewed = lifecycle.review(&claim, &ReviewEdits::default()).unwrap();
        assert_eq!(reviewed.village.value, "Khari");
        assert!(reviewed.linked_village.is_none());
    }

    #[test]
    fn test_review_rejects_empty_edit_and_leaves_claim() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.3, matched("Khairi", 0.6))).unwrap();
        let before = claim.clone();
        let edits = ReviewEdits {
            area: Some(String::new()),
            ..Default::default()
        };

        let err = lifecycle.review(&claim, &edits).unwrap_err();
        assert_eq!(err, LifecycleError::MissingField("area".to_string()));
        assert_eq!(claim, before);
    }

    #[test]
    fn test_review_only_from_needs_review() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let linked = lifecycle.intake(record(0.95, matched("Khairi", 0.95))).unwrap();
        let err = lifecycle.review(&linked, &ReviewEdits::default()).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { action: Action::Review, .. }));
    }

    #[test]
    fn test_link_requires_reviewed_and_village() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.3, matched("Khairi", 0.6))).unwrap();

        let err = lifecycle.link(&claim).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidTransition {
                from: ClaimStatus::NeedsReview,
                action: Action::Link
            }
        ));

        let reviewed = lifecycle.review(&claim, &ReviewEdits::default()).unwrap();
        let linked = lifecycle.link(&reviewed).unwrap();
        assert_eq!(linked.status, ClaimStatus::Linked);
        assert_eq!(linked.village, reviewed.village);
    }

    #[test]
    fn test_link_without_village_rejected() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let geo = Some(GeoLink {
            linked_village_name: None,
            confidence_score: 0.0,
        });
        let claim = lifecycle.intake(record(0.9, geo)).unwrap();
        let reviewed = lifecycle.review(&claim, &ReviewEdits::default()).unwrap();

        let err = lifecycle.link(&reviewed).unwrap_err();
        assert_eq!(err, LifecycleError::MissingField("linked_village".to_string()));
    }

    #[test]
    fn test_edit_sets_full_confidence_and_keeps_status() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.3, matched("Khairi", 0.6))).unwrap();

        let edited = lifecycle.edit(&claim, ClaimField::Area, "2.4 ha").unwrap();
        assert_eq!(edited.area, ConfidenceField::new("2.4 ha".to_string(), 1.0));
        assert_eq!(edited.status, ClaimStatus::NeedsReview);
        assert_eq!(edited.claimant_name, claim.claimant_name);
    }

    #[test]
    fn test_edit_claim_type() {
        let mut lifecycle = ClaimLifecycle::default_config();
        let claim = lifecycle.intake(record(0.95, matched("Khairi", 0.95))).unwrap();

        let edited = lifecycle.edit(&claim, ClaimField::ClaimType, "cr").unwrap();
        assert_eq!(edited.claim_type.value, ClaimType::Cr);
        assert_eq!(edited.status, ClaimStatus::Linked);

        let err = lifecycle.edit(&claim, ClaimField::ClaimType, "XYZ").unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidValue { .. }));
    }

    #[test]
    fn test_extraction_record_accepts_camel_case() {
        let json = r#"{
            "claimantName": {"value": "Lalita", "confidence": 0.9},
            "village": {"value": "Devgaon", "confidence": 0.85},
            "claimType": {"value": "CFR", "confidence": 0.9},
            "area": {"value": "40 ha", "confidence": 0.8},
            "date": {"value": "2018-01-20", "confidence": 0.9},
            "geoLink": {"linkedVillageName": "Devgaon", "confidenceScore": 0.97}
        }"#;
        let record: ExtractionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.claim_type.value, ClaimType::Cfr);
        assert_eq!(
            record.geo_link.and_then(|g| g.linked_village_name),
            Some("Devgaon".to_string())
        );
    }
}
