//! Camp Distributor - battleground camp planning over a region graph

pub mod core;
pub mod distribution;
pub mod loader;
pub mod map;
