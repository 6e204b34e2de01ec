//! The owned claim collection

use crate::StoreError;
use patta_domain::traits::{ClaimQuery, ClaimStore};
use patta_domain::{Claim, ClaimId};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical collection of claims, keyed by id
///
/// Updates replace a claim by identity. Iteration is in id order, which for
/// UUIDv7 ids is intake order.
#[derive(Debug, Clone, Default)]
pub struct ClaimLedger {
    claims: BTreeMap<ClaimId, Claim>,
}

impl ClaimLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from claims, rejecting duplicate ids
    pub fn from_claims(claims: Vec<Claim>) -> Result<Self, StoreError> {
        let mut ledger = Self::new();
        for claim in claims {
            ledger.insert_claim(claim)?;
        }
        Ok(ledger)
    }

    /// Load a JSON snapshot; a missing file yields an empty ledger
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No claim snapshot, starting empty");
            return Ok(Self::new());
        }

        let contents = fs::read_to_string(path)?;
        let claims: Vec<Claim> = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), count = claims.len(), "Claims loaded");
        Self::from_claims(claims)
    }

    /// Write the ledger as a JSON snapshot
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the snapshot, then rename over it, so a failed write
        // never leaves a truncated file behind
        let contents = serde_json::to_string_pretty(&self.claims())?;
        let mut temp_name = path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        if let Err(e) = fs::write(&temp_path, contents) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        fs::rename(&temp_path, path)?;
        tracing::info!(path = %path.display(), count = self.len(), "Claims saved");
        Ok(())
    }

    /// All claims in id order
    pub fn claims(&self) -> Vec<Claim> {
        self.claims.values().cloned().collect()
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Borrow a claim by id
    pub fn get(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.get(&id)
    }

    /// Resolve a full id or a unique prefix of its string form
    pub fn resolve(&self, id_or_prefix: &str) -> Result<ClaimId, StoreError> {
        let needle = id_or_prefix.trim().to_lowercase();
        if let Ok(id) = ClaimId::from_string(&needle) {
            if self.claims.contains_key(&id) {
                return Ok(id);
            }
            return Err(StoreError::ClaimNotFound(id_or_prefix.to_string()));
        }
        if needle.is_empty() {
            return Err(StoreError::ClaimNotFound(id_or_prefix.to_string()));
        }

        let matches: Vec<ClaimId> = self
            .claims
            .keys()
            .filter(|id| id.to_string().starts_with(&needle))
            .copied()
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(StoreError::ClaimNotFound(id_or_prefix.to_string())),
            _ => Err(StoreError::AmbiguousId {
                prefix: id_or_prefix.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Apply a fallible update to one claim and store the result
    ///
    /// When `update` fails the stored claim is left as it was.
    pub fn apply<E, F>(&mut self, id: ClaimId, update: F) -> Result<Claim, E>
    where
        F: FnOnce(&Claim) -> Result<Claim, E>,
        E: From<StoreError>,
    {
        let current = self
            .claims
            .get(&id)
            .ok_or_else(|| StoreError::ClaimNotFound(id.to_string()))?;
        let updated = update(current)?;
        self.claims.insert(id, updated.clone());
        Ok(updated)
    }
}

impl ClaimStore for ClaimLedger {
    type Error = StoreError;

    fn insert_claim(&mut self, claim: Claim) -> Result<ClaimId, Self::Error> {
        let id = claim.id;
        if self.claims.contains_key(&id) {
            return Err(StoreError::DuplicateClaim(id));
        }
        self.claims.insert(id, claim);
        Ok(id)
    }

    fn replace_claim(&mut self, claim: Claim) -> Result<(), Self::Error> {
        match self.claims.get_mut(&claim.id) {
            Some(slot) => {
                *slot = claim;
                Ok(())
            }
            None => Err(StoreError::ClaimNotFound(claim.id.to_string())),
        }
    }

    fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, Self::Error> {
        Ok(self.claims.get(&id).cloned())
    }

    fn query_claims(&self, query: &ClaimQuery) -> Result<Vec<Claim>, Self::Error> {
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(self
            .claims
            .values()
            .filter(|claim| query.matches(claim))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patta_domain::{ClaimStatus, ClaimType, ConfidenceField, GeoPoint};

    fn claim(id: u128, village: &str, status: ClaimStatus) -> Claim {
        let text = |v: &str| ConfidenceField::new(v.to_string(), 0.9);
        Claim {
            id: ClaimId::from_value(id),
            claimant_name: text("Bhuri Bai"),
            village: text(village),
            claim_type: ConfidenceField::new(ClaimType::Ifr, 0.9),
            area: text("1 ha"),
            date: text("2020-01-01"),
            linked_village: Some(village.to_string()),
            geo_link_confidence: 0.9,
            status,
            location: GeoPoint::default(),
            created_at: 0,
        }
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut ledger = ClaimLedger::new();
        ledger.insert_claim(claim(1, "Sarai", ClaimStatus::Linked)).unwrap();
        let err = ledger.insert_claim(claim(1, "Sarai", ClaimStatus::Linked)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateClaim(_)));
    }

    #[test]
    fn test_replace_by_id() {
        let mut ledger = ClaimLedger::new();
        ledger.insert_claim(claim(1, "Sarai", ClaimStatus::NeedsReview)).unwrap();

        ledger.replace_claim(claim(1, "Sarai", ClaimStatus::Reviewed)).unwrap();
        assert_eq!(ledger.get(ClaimId::from_value(1)).unwrap().status, ClaimStatus::Reviewed);

        let err = ledger.replace_claim(claim(2, "Sarai", ClaimStatus::Reviewed)).unwrap_err();
        assert!(matches!(err, StoreError::ClaimNotFound(_)));
    }

    #[test]
    fn test_query_filters_and_limit() {
        let ledger = ClaimLedger::from_claims(vec![
            claim(1, "Sarai", ClaimStatus::NeedsReview),
            claim(2, "Sarai", ClaimStatus::Linked),
            claim(3, "Amgaon", ClaimStatus::NeedsReview),
            claim(4, "Sarai", ClaimStatus::NeedsReview),
        ])
        .unwrap();

        let query = ClaimQuery {
            linked_village: Some("Sarai".to_string()),
            status: Some(ClaimStatus::NeedsReview),
            ..Default::default()
        };
        let ids: Vec<u128> = ledger.query_claims(&query).unwrap().iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);

        let limited = ClaimQuery {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(ledger.query_claims(&limited).unwrap().len(), 2);
    }

    #[test]
    fn test_resolve_prefix() {
        let ledger = ClaimLedger::from_claims(vec![
            claim(0x1111 << 112, "Sarai", ClaimStatus::Linked),
            claim(0x1122 << 112, "Sarai", ClaimStatus::Linked),
        ])
        .unwrap();

        let first = ClaimId::from_value(0x1111 << 112);
        let prefix = &first.to_string()[..4];
        assert_eq!(prefix, "1111");
        assert_eq!(ledger.resolve(prefix).unwrap(), first);
        assert_eq!(ledger.resolve(&first.to_string()).unwrap(), first);

        assert!(matches!(ledger.resolve("11"), Err(StoreError::AmbiguousId { count: 2, .. })));
        assert!(matches!(ledger.resolve("ffff"), Err(StoreError::ClaimNotFound(_))));
        assert!(matches!(ledger.resolve(""), Err(StoreError::ClaimNotFound(_))));
    }

    #[test]
    fn test_apply_failure_leaves_claim() {
        let mut ledger = ClaimLedger::from_claims(vec![claim(1, "Sarai", ClaimStatus::NeedsReview)]).unwrap();
        let id = ClaimId::from_value(1);

        let result: Result<Claim, StoreError> =
            ledger.apply(id, |_| Err(StoreError::ClaimNotFound("boom".to_string())));
        assert!(result.is_err());
        assert_eq!(ledger.get(id).unwrap().status, ClaimStatus::NeedsReview);

        let updated: Result<Claim, StoreError> = ledger.apply(id, |c| {
            let mut next = c.clone();
            next.status = ClaimStatus::Reviewed;
            Ok(next)
        });
        assert_eq!(updated.unwrap().status, ClaimStatus::Reviewed);
        assert_eq!(ledger.get(id).unwrap().status, ClaimStatus::Reviewed);
    }
}
