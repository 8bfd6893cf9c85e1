pub mod config;
pub mod error;
pub mod types;

pub use config::DistributorConfig;
pub use error::{CampError, Result};
pub use types::{CampTarget, RegionId};
