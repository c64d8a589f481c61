//! Per-build capacity configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-build capacity ceilings, fixed for the duration of one packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacityLimits {
    /// Maximum fiber volume per build, in cc.
    pub max_fiber_cc: f64,

    /// Maximum matrix volume per build, in cc.
    pub max_matrix_cc: f64,

    /// Maximum number of tube samples per build.
    pub target_samples: u32,
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self {
            max_fiber_cc: 45.0,
            max_matrix_cc: 750.0,
            target_samples: 5,
        }
    }
}

impl CapacityLimits {
    /// Creates limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-build fiber ceiling in cc.
    pub fn with_max_fiber(mut self, cc: f64) -> Self {
        self.max_fiber_cc = cc;
        self
    }

    /// Sets the per-build matrix ceiling in cc.
    pub fn with_max_matrix(mut self, cc: f64) -> Self {
        self.max_matrix_cc = cc;
        self
    }

    /// Sets the per-build tube sample ceiling.
    pub fn with_target_samples(mut self, samples: u32) -> Self {
        self.target_samples = samples;
        self
    }

    /// Checks that the ceilings are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.max_fiber_cc.is_finite() || self.max_fiber_cc <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "fiber limit must be positive, got {}",
                self.max_fiber_cc
            )));
        }

        if !self.max_matrix_cc.is_finite() || self.max_matrix_cc <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "matrix limit must be positive, got {}",
                self.max_matrix_cc
            )));
        }

        if self.target_samples == 0 {
            return Err(Error::InvalidConfig(
                "sample target must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_defaults() {
        let limits = CapacityLimits::default();
        assert_eq!(limits.max_fiber_cc, 45.0);
        assert_eq!(limits.max_matrix_cc, 750.0);
        assert_eq!(limits.target_samples, 5);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_limits_builder() {
        let limits = CapacityLimits::new()
            .with_max_fiber(10.0)
            .with_max_matrix(120.0)
            .with_target_samples(2);

        assert_eq!(limits.max_fiber_cc, 10.0);
        assert_eq!(limits.max_matrix_cc, 120.0);
        assert_eq!(limits.target_samples, 2);
    }

    #[test]
    fn test_limits_validate() {
        assert!(CapacityLimits::new().with_max_fiber(0.0).validate().is_err());
        assert!(CapacityLimits::new()
            .with_max_matrix(-5.0)
            .validate()
            .is_err());
        assert!(CapacityLimits::new()
            .with_max_fiber(f64::INFINITY)
            .validate()
            .is_err());
        assert!(CapacityLimits::new()
            .with_target_samples(0)
            .validate()
            .is_err());
    }
}
