//! Part definitions: the units assigned to builds.

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a part.
pub type PartId = String;

/// Print orientation of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Flat on the print bed.
    #[default]
    Xy,
    /// On edge.
    Xz,
    /// Upright; prints as a tube that is later cut into multiple samples.
    Zx,
}

impl Orientation {
    /// Returns true for the upright orientation that prints as a tube.
    pub fn is_tube(self) -> bool {
        matches!(self, Orientation::Zx)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Xy => "XY",
            Orientation::Xz => "XZ",
            Orientation::Zx => "ZX",
        };
        f.write_str(s)
    }
}

/// The two consumables tracked per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// Continuous fiber reinforcement.
    Fiber,
    /// Matrix filament.
    Matrix,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Material::Fiber => "fiber",
            Material::Matrix => "matrix",
        };
        f.write_str(s)
    }
}

/// A test part to be assigned to a build.
///
/// Parts are immutable once created; the packer clones them into builds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Unique identifier.
    id: PartId,

    /// Fiber volume consumed when printed, in cc.
    fiber_cc: f64,

    /// Matrix volume consumed when printed, in cc.
    matrix_cc: f64,

    /// Print orientation.
    orientation: Orientation,

    /// Number of samples cut from the printed unit (more than one for tubes).
    sample_count: u32,

    /// Estimated print time.
    print_time: Duration,

    /// Conditioning batch this part belongs to, if constrained.
    batch: Option<String>,

    /// Machine this part must print on, if constrained.
    machine: Option<String>,
}

impl Part {
    /// Creates a new part with the given ID and material volumes in cc.
    pub fn new(id: impl Into<PartId>, fiber_cc: f64, matrix_cc: f64) -> Self {
        Self {
            id: id.into(),
            fiber_cc,
            matrix_cc,
            orientation: Orientation::default(),
            sample_count: 1,
            print_time: Duration::ZERO,
            batch: None,
            machine: None,
        }
    }

    /// Sets the print orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the number of samples cut from the printed unit.
    pub fn with_sample_count(mut self, count: u32) -> Self {
        self.sample_count = count;
        self
    }

    /// Sets the estimated print time.
    pub fn with_print_time(mut self, time: Duration) -> Self {
        self.print_time = time;
        self
    }

    /// Sets the conditioning batch.
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    /// Sets the machine assignment.
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = Some(machine.into());
        self
    }

    /// Returns the part's identifier.
    pub fn id(&self) -> &PartId {
        &self.id
    }

    /// Returns the fiber volume in cc.
    pub fn fiber_cc(&self) -> f64 {
        self.fiber_cc
    }

    /// Returns the matrix volume in cc.
    pub fn matrix_cc(&self) -> f64 {
        self.matrix_cc
    }

    /// Returns the print orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of samples cut from the printed unit.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Returns the estimated print time.
    pub fn print_time(&self) -> Duration {
        self.print_time
    }

    /// Returns the conditioning batch, if any.
    pub fn batch(&self) -> Option<&str> {
        self.batch.as_deref()
    }

    /// Returns the machine assignment, if any.
    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }

    /// Checks that the part definition is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.fiber_cc.is_finite() || self.fiber_cc < 0.0 {
            return Err(Error::InvalidPart(format!(
                "part {} has invalid fiber volume {}",
                self.id, self.fiber_cc
            )));
        }

        if !self.matrix_cc.is_finite() || self.matrix_cc < 0.0 {
            return Err(Error::InvalidPart(format!(
                "part {} has invalid matrix volume {}",
                self.id, self.matrix_cc
            )));
        }

        if self.sample_count == 0 {
            return Err(Error::InvalidPart(format!(
                "part {} must yield at least one sample",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_builder() {
        let part = Part::new("D6641-ZX-B0-M0-S0", 2.5, 35.0)
            .with_orientation(Orientation::Zx)
            .with_sample_count(2)
            .with_print_time(Duration::from_secs(5400))
            .with_batch("A")
            .with_machine("1");

        assert_eq!(part.id(), "D6641-ZX-B0-M0-S0");
        assert_eq!(part.fiber_cc(), 2.5);
        assert_eq!(part.matrix_cc(), 35.0);
        assert!(part.orientation().is_tube());
        assert_eq!(part.sample_count(), 2);
        assert_eq!(part.print_time(), Duration::from_secs(5400));
        assert_eq!(part.batch(), Some("A"));
        assert_eq!(part.machine(), Some("1"));
    }

    #[test]
    fn test_part_defaults() {
        let part = Part::new("D3039-XY-B0-M0-S0", 3.2, 41.0);

        assert_eq!(part.orientation(), Orientation::Xy);
        assert!(!part.orientation().is_tube());
        assert_eq!(part.sample_count(), 1);
        assert_eq!(part.print_time(), Duration::ZERO);
        assert_eq!(part.batch(), None);
        assert_eq!(part.machine(), None);
    }

    #[test]
    fn test_part_validate() {
        assert!(Part::new("ok", 0.0, 0.0).validate().is_ok());
        assert!(Part::new("neg-fiber", -1.0, 0.0).validate().is_err());
        assert!(Part::new("neg-matrix", 0.0, -1.0).validate().is_err());
        assert!(Part::new("nan", f64::NAN, 0.0).validate().is_err());
        assert!(Part::new("no-samples", 1.0, 1.0)
            .with_sample_count(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Xy.to_string(), "XY");
        assert_eq!(Orientation::Xz.to_string(), "XZ");
        assert_eq!(Orientation::Zx.to_string(), "ZX");
    }
}
