//! Region - a node of the battleground adjacency graph

use std::collections::BTreeSet;

use crate::core::error::{CampError, Result};
use crate::core::types::RegionId;

/// A map subdivision that may hold camps
#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub name: String,

    // Adjacency, only mutated through RegionGraph::connect
    neighbors: BTreeSet<RegionId>,

    // Set once by the loader
    capacity: u32,
    owned: bool,
    spawn_spot: bool,

    // Only ever raised during one distribution run
    desired: u32,
}

impl Region {
    /// Create an empty region with identity only
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: BTreeSet::new(),
            capacity: 0,
            owned: false,
            spawn_spot: false,
            desired: 0,
        }
    }

    /// Apply loader data. Spawn spots never hold camps.
    pub fn init(&mut self, capacity: u32, owned: bool, spawn_spot: bool) {
        self.capacity = if spawn_spot { 0 } else { capacity };
        self.owned = owned;
        self.spawn_spot = spawn_spot;
    }

    pub fn neighbors(&self) -> &BTreeSet<RegionId> {
        &self.neighbors
    }

    pub(crate) fn neighbors_mut(&mut self) -> &mut BTreeSet<RegionId> {
        &mut self.neighbors
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    pub fn is_spawn_spot(&self) -> bool {
        self.spawn_spot
    }

    pub fn desired(&self) -> u32 {
        self.desired
    }

    /// Contested regions are scored against the camp target
    pub fn is_contested(&self) -> bool {
        !self.owned && !self.spawn_spot
    }

    pub fn has_spare_capacity(&self) -> bool {
        self.desired < self.capacity
    }

    /// Camps this region could hold but was not asked to
    pub fn camps_saved(&self) -> u32 {
        self.capacity - self.desired
    }

    /// Raise the quota to at least `candidate`; lower candidates are ignored.
    pub fn raise_desired(&mut self, candidate: u32) -> Result<()> {
        if candidate > self.capacity {
            return Err(CampError::consistency(
                &self.name,
                format!("desired {} exceeds capacity {}", candidate, self.capacity),
            ));
        }
        self.desired = self.desired.max(candidate);
        Ok(())
    }

    /// Add a single camp
    pub fn add_camp(&mut self) -> Result<()> {
        self.raise_desired(self.desired + 1)
    }

    /// Fill to full capacity
    pub fn saturate(&mut self) {
        self.desired = self.capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(capacity: u32) -> Region {
        let mut r = Region::new(RegionId(0), "A1M");
        r.init(capacity, true, false);
        r
    }

    #[test]
    fn test_desired_never_decreases() {
        let mut r = region(5);
        r.raise_desired(3).unwrap();
        r.raise_desired(1).unwrap();
        assert_eq!(r.desired(), 3);
    }

    #[test]
    fn test_desired_bounded_by_capacity() {
        let mut r = region(2);
        r.add_camp().unwrap();
        r.add_camp().unwrap();
        let err = r.add_camp().unwrap_err();
        assert!(matches!(err, CampError::InternalConsistency { .. }));
        assert_eq!(r.desired(), 2);
    }

    #[test]
    fn test_spawn_spot_has_no_capacity() {
        let mut r = Region::new(RegionId(3), "D1B");
        r.init(4, false, true);
        assert_eq!(r.capacity(), 0);
        assert!(!r.is_contested());
    }

    #[test]
    fn test_camps_saved() {
        let mut r = region(5);
        r.raise_desired(2).unwrap();
        assert_eq!(r.camps_saved(), 3);
        r.saturate();
        assert_eq!(r.camps_saved(), 0);
    }
}
