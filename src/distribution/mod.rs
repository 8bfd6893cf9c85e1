//! Camp distribution
//!
//! `Distributor` does one greedy fill, `TrialSelector` repeats it over
//! shuffled traversal orders, and `ConstraintReporter` checks the winner.

pub mod distributor;
pub mod output;
pub mod planner;
pub mod report;
pub mod trials;

pub use distributor::Distributor;
pub use output::{DistributionOutput, TrialStats};
pub use planner::plan;
pub use report::{allocations, Allocation, ConstraintReporter, Violation, ViolationKind};
pub use trials::{BestTrial, Selection, TrialResult, TrialSelector};
