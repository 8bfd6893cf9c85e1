//! Static map shapes: naming plus adjacency

use crate::core::error::Result;
use crate::core::types::RegionId;
use crate::map::graph::RegionGraph;

/// A fixed battleground layout
pub trait MapTopology {
    /// Display name of the map
    fn name(&self) -> &str;

    /// Ids of every region that takes part in the graph
    fn region_ids(&self) -> Vec<RegionId>;

    /// Convert a region id to its in-game label
    fn id_to_name(&self, id: RegionId) -> Result<String>;

    /// Undirected adjacency pairs
    fn edges(&self) -> Result<Vec<(RegionId, RegionId)>>;

    /// Build a fresh, uninitialised graph for this map
    fn build_graph(&self) -> Result<RegionGraph> {
        let mut graph = RegionGraph::new();
        for id in self.region_ids() {
            let name = self.id_to_name(id)?;
            graph.add_region(id, name)?;
        }
        for (a, b) in self.edges()? {
            graph.connect(a, b)?;
        }
        Ok(graph)
    }
}
