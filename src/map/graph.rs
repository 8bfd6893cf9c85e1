//! RegionGraph - the regions of one trial and their adjacency

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::core::error::{CampError, Result};
use crate::core::types::RegionId;
use crate::map::region::Region;

/// All regions of a map, keyed by id so iteration order is stable.
///
/// Append-only: a graph is built for exactly one trial and then dropped.
#[derive(Clone, Debug, Default)]
pub struct RegionGraph {
    regions: BTreeMap<RegionId, Region>,
    names: AHashMap<String, RegionId>,
}

impl RegionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty region. Ids and names must both be unique.
    pub fn add_region(&mut self, id: RegionId, name: impl Into<String>) -> Result<&mut Region> {
        let name = name.into();
        if self.regions.contains_key(&id) {
            return Err(CampError::DuplicateRegion(id));
        }
        if self.names.contains_key(&name) {
            return Err(CampError::DuplicateName(name));
        }

        self.names.insert(name.clone(), id);
        Ok(self.regions.entry(id).or_insert_with(|| Region::new(id, name)))
    }

    /// Connect two regions in both directions. Re-adding an edge is a no-op.
    pub fn connect(&mut self, a: RegionId, b: RegionId) -> Result<()> {
        if a == b {
            return Err(CampError::InvalidEdge(a, b));
        }
        if !self.regions.contains_key(&a) || !self.regions.contains_key(&b) {
            return Err(CampError::InvalidEdge(a, b));
        }

        // Both endpoints are known to exist, so neither insert can be skipped.
        if let Some(region) = self.regions.get_mut(&a) {
            region.neighbors_mut().insert(b);
        }
        if let Some(region) = self.regions.get_mut(&b) {
            region.neighbors_mut().insert(a);
        }
        Ok(())
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(&id)
    }

    /// Look up a region, turning a miss into an error
    pub fn region(&self, id: RegionId) -> Result<&Region> {
        self.regions
            .get(&id)
            .ok_or_else(|| CampError::UnknownRegion(format!("{:?}", id)))
    }

    pub fn region_mut(&mut self, id: RegionId) -> Result<&mut Region> {
        self.regions
            .get_mut(&id)
            .ok_or_else(|| CampError::UnknownRegion(format!("{:?}", id)))
    }

    pub fn id_of(&self, name: &str) -> Option<RegionId> {
        self.names.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Region> {
        self.id_of(name).and_then(|id| self.regions.get(&id))
    }

    /// All regions in ascending id order
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Ids of unowned regions, in id order
    pub fn unowned_ids(&self) -> Vec<RegionId> {
        self.regions
            .values()
            .filter(|r| !r.is_owned())
            .map(|r| r.id)
            .collect()
    }

    /// Owned regions that can hold at least one camp, in id order
    pub fn owned_buildable(&self) -> impl Iterator<Item = &Region> {
        self.regions
            .values()
            .filter(|r| r.is_owned() && r.capacity() > 0)
    }

    /// Total camps saved across all owned, buildable regions
    pub fn camps_saved(&self) -> u64 {
        self.owned_buildable()
            .map(|r| u64::from(r.camps_saved()))
            .sum()
    }

    /// Sum of desired camps over a region's neighbors
    pub fn neighbor_desired_total(&self, id: RegionId) -> Result<u64> {
        let region = self.region(id)?;
        Ok(region
            .neighbors()
            .iter()
            .filter_map(|n| self.regions.get(n))
            .map(|n| u64::from(n.desired()))
            .sum())
    }
}
