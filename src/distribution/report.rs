//! Read-only inspection of a finished distribution

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{CampTarget, RegionId};
use crate::map::graph::RegionGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    Overshot,
    Undershot,
}

/// A contested region whose bordering camps miss the target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub region: RegionId,
    pub name: String,
    pub kind: ViolationKind,
    /// Desired camps summed over all neighbors
    pub total: u64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            ViolationKind::Overshot => "Overshot",
            ViolationKind::Undershot => "Undershot",
        };
        write!(f, "{} {}: {}", label, self.name, self.total)
    }
}

/// Final quota of one owned region
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub region: RegionId,
    pub name: String,
    pub desired: u32,
    pub capacity: u32,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.desired, self.capacity)
    }
}

/// Owned regions that can hold camps, in id order
pub fn allocations(graph: &RegionGraph) -> Vec<Allocation> {
    graph
        .owned_buildable()
        .map(|r| Allocation {
            region: r.id,
            name: r.name.clone(),
            desired: r.desired(),
            capacity: r.capacity(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintReporter {
    target: CampTarget,
}

impl ConstraintReporter {
    pub fn new(target: CampTarget) -> Self {
        Self { target }
    }

    /// Classify every contested, non-spawn region. Satisfied regions are
    /// left out; the rest come back in id order.
    pub fn classify(&self, graph: &RegionGraph) -> Result<Vec<Violation>> {
        let target = u64::from(self.target.get());
        let mut violations = Vec::new();

        for region in graph.regions().filter(|r| r.is_contested()) {
            let total = graph.neighbor_desired_total(region.id)?;
            let kind = match total.cmp(&target) {
                std::cmp::Ordering::Equal => continue,
                std::cmp::Ordering::Greater => ViolationKind::Overshot,
                std::cmp::Ordering::Less => ViolationKind::Undershot,
            };
            violations.push(Violation {
                region: region.id,
                name: region.name.clone(),
                kind,
                total,
            });
        }

        Ok(violations)
    }
}
