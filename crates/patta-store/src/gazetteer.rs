//! The village gazetteer

use crate::StoreError;
use patta_domain::traits::VillageRegistry;
use patta_domain::{Village, VillageId};
use std::fs;
use std::path::Path;

/// Fixed registry of known villages
///
/// Names are unique; lookups by name are exact.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    villages: Vec<Village>,
}

impl Gazetteer {
    /// Build a gazetteer, rejecting duplicate names
    pub fn new(villages: Vec<Village>) -> Result<Self, StoreError> {
        for (i, village) in villages.iter().enumerate() {
            if villages[..i].iter().any(|v| v.name == village.name) {
                return Err(StoreError::DuplicateVillage(village.name.clone()));
            }
        }
        Ok(Self { villages })
    }

    /// Load a JSON array of villages
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let villages: Vec<Village> = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), count = villages.len(), "Gazetteer loaded");
        Self::new(villages)
    }

    /// Villages in file order
    pub fn as_slice(&self) -> &[Village] {
        &self.villages
    }

    /// Number of villages
    pub fn len(&self) -> usize {
        self.villages.len()
    }

    /// Whether the gazetteer is empty
    pub fn is_empty(&self) -> bool {
        self.villages.is_empty()
    }
}

impl VillageRegistry for Gazetteer {
    type Error = StoreError;

    fn find_by_name(&self, name: &str) -> Result<Option<Village>, Self::Error> {
        Ok(self.villages.iter().find(|v| v.name == name).cloned())
    }

    fn find_by_id(&self, id: &VillageId) -> Result<Option<Village>, Self::Error> {
        Ok(self.villages.iter().find(|v| &v.id == id).cloned())
    }

    fn villages(&self) -> Result<Vec<Village>, Self::Error> {
        Ok(self.villages.clone())
    }
}
