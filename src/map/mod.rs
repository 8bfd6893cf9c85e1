//! Region adjacency model
//!
//! `Region` and `RegionGraph` hold the state of one trial; `MapTopology`
//! implementations describe the fixed shape a graph is built from.

pub mod graph;
pub mod region;
pub mod topology;
pub mod volcano;

pub use graph::RegionGraph;
pub use region::Region;
pub use topology::MapTopology;
pub use volcano::VolcanoArchipelago;
