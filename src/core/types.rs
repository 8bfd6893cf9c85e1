//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::{CampError, Result};

/// Stable region identity; also the canonical ordering key for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// Number of camps each contested region should be bordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampTarget(u32);

impl CampTarget {
    /// Build a target, rejecting non-positive values
    pub fn new(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(CampError::InvalidConfig(format!(
                "camp target must be positive, got {}",
                value
            )));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| CampError::InvalidConfig(format!("camp target {} is too large", value)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CampTarget {
    fn default() -> Self {
        Self(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_rejects_non_positive() {
        assert!(matches!(CampTarget::new(0), Err(CampError::InvalidConfig(_))));
        assert!(matches!(CampTarget::new(-3), Err(CampError::InvalidConfig(_))));
    }

    #[test]
    fn test_target_default_is_four() {
        assert_eq!(CampTarget::default().get(), 4);
        assert_eq!(CampTarget::new(4).unwrap(), CampTarget::default());
    }
}
