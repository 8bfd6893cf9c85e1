use thiserror::Error;

use crate::core::types::RegionId;

#[derive(Error, Debug)]
pub enum CampError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal consistency fault at {region}: {detail}")]
    InternalConsistency { region: String, detail: String },

    #[error("No viable trial out of {attempts} attempts (last error: {last_error})")]
    NoViableTrial { attempts: usize, last_error: String },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Duplicate region: {0:?}")]
    DuplicateRegion(RegionId),

    #[error("Duplicate region name: {0}")]
    DuplicateName(String),

    #[error("Invalid edge between {0:?} and {1:?}")]
    InvalidEdge(RegionId, RegionId),

    #[error("Load error: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CampError {
    pub fn consistency(region: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InternalConsistency {
            region: region.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CampError>;
