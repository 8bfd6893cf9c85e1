//! Greedy camp fill
//!
//! Each contested (unowned) region wants its owned neighbors to hold exactly
//! the camp target between them. Regions are visited one at a time and
//! camps already committed by earlier visits count toward later ones, so the
//! outcome depends on the visiting order. Callers pick that order explicitly.

use crate::core::error::{CampError, Result};
use crate::core::types::{CampTarget, RegionId};
use crate::map::graph::RegionGraph;

/// Snapshot of an owned neighbor taken before filling starts
#[derive(Clone, Copy, Debug)]
struct Holder {
    id: RegionId,
    desired: u64,
    capacity: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Distributor {
    target: CampTarget,
}

impl Distributor {
    pub fn new(target: CampTarget) -> Self {
        Self { target }
    }

    /// Fill the graph visiting unowned regions in id order
    pub fn distribute(&self, graph: &mut RegionGraph) -> Result<()> {
        let order = graph.unowned_ids();
        self.distribute_in_order(graph, &order)
    }

    /// Fill the graph visiting regions in the given order.
    ///
    /// Owned regions in `order` are ignored; unowned regions missing from it
    /// are never visited.
    pub fn distribute_in_order(&self, graph: &mut RegionGraph, order: &[RegionId]) -> Result<()> {
        for &id in order {
            if graph.region(id)?.is_owned() {
                continue;
            }
            self.fill_contested(graph, id)?;
        }
        Ok(())
    }

    fn fill_contested(&self, graph: &mut RegionGraph, contested: RegionId) -> Result<()> {
        let region = graph.region(contested)?;
        let name = region.name.clone();
        let mut holders: Vec<Holder> = region
            .neighbors()
            .iter()
            .filter_map(|n| graph.get(*n))
            .filter(|n| n.is_owned())
            .map(|n| Holder {
                id: n.id,
                desired: u64::from(n.desired()),
                capacity: u64::from(n.capacity()),
            })
            .collect();

        let target = u64::from(self.target.get());
        let capacity_sum: u64 = holders.iter().map(|h| h.capacity).sum();

        // Target out of reach: every camp we can place here helps.
        if capacity_sum <= target {
            for holder in &holders {
                graph.region_mut(holder.id)?.saturate();
            }
            tracing::debug!(
                "{}: saturated {} neighbors ({} <= {})",
                name,
                holders.len(),
                capacity_sum,
                target
            );
            return Ok(());
        }

        let committed: u64 = holders.iter().map(|h| h.desired).sum();
        if committed >= target {
            return Ok(());
        }
        let mut remaining = target - committed;

        // Least-filled first; equal fills go to the smaller region first.
        holders.sort_by_key(|h| (h.desired, h.capacity, h.id));

        while remaining > 0 {
            let mut placed = false;
            for holder in &holders {
                let neighbor = graph.region_mut(holder.id)?;
                if !neighbor.has_spare_capacity() {
                    continue;
                }
                neighbor.add_camp()?;
                placed = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }

            if !placed {
                return Err(CampError::consistency(
                    name,
                    format!(
                        "{} camps still needed but no neighbor has spare capacity (capacity sum {})",
                        remaining, capacity_sum
                    ),
                ));
            }
        }

        tracing::debug!("{}: filled to target {}", name, target);
        Ok(())
    }
}
