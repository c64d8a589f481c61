//! Builds: batches of parts printed and postprocessed together.

use std::fmt;
use std::time::Duration;

use crate::limits::CapacityLimits;
use crate::part::Part;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A batch of parts processed together, subject to capacity limits.
///
/// Builds only ever grow: parts are appended and never removed, so the
/// running totals increase monotonically over the life of a packing run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Build {
    /// Assigned parts, in assignment order.
    parts: Vec<Part>,

    /// Fiber consumed so far, in cc.
    fiber_used: f64,

    /// Matrix consumed so far, in cc.
    matrix_used: f64,

    /// Tube samples held so far. Non-tube parts do not count.
    sample_total: u32,

    /// Accumulated print time.
    print_time: Duration,

    /// Batch adopted from the first constrained part.
    batch: Option<String>,

    /// Machine adopted from the first constrained part.
    machine: Option<String>,
}

impl Build {
    /// Creates an empty build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this build can take the part without breaking a
    /// capacity limit or an adopted batch/machine constraint.
    pub fn accepts(&self, part: &Part, limits: &CapacityLimits) -> bool {
        if self.fiber_used + part.fiber_cc() > limits.max_fiber_cc {
            return false;
        }

        if self.matrix_used + part.matrix_cc() > limits.max_matrix_cc {
            return false;
        }

        // The sample ceiling applies to tube parts only.
        if part.orientation().is_tube()
            && self.sample_total + part.sample_count() > limits.target_samples
        {
            return false;
        }

        compatible(self.batch.as_deref(), part.batch())
            && compatible(self.machine.as_deref(), part.machine())
    }

    /// Appends a part and updates the running totals.
    ///
    /// Callers check [`Build::accepts`] first; pushing never fails.
    pub fn push(&mut self, part: Part) {
        self.fiber_used += part.fiber_cc();
        self.matrix_used += part.matrix_cc();
        if part.orientation().is_tube() {
            self.sample_total += part.sample_count();
        }
        self.print_time += part.print_time();

        if self.batch.is_none() {
            self.batch = part.batch().map(str::to_owned);
        }
        if self.machine.is_none() {
            self.machine = part.machine().map(str::to_owned);
        }

        self.parts.push(part);
    }

    /// Returns the assigned parts in assignment order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the number of assigned parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if no part has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the fiber consumed so far, in cc.
    pub fn fiber_used(&self) -> f64 {
        self.fiber_used
    }

    /// Returns the matrix consumed so far, in cc.
    pub fn matrix_used(&self) -> f64 {
        self.matrix_used
    }

    /// Returns the number of tube samples held so far.
    pub fn sample_total(&self) -> u32 {
        self.sample_total
    }

    /// Returns the accumulated print time.
    pub fn print_time(&self) -> Duration {
        self.print_time
    }

    /// Returns the adopted batch, if any part constrained it.
    pub fn batch(&self) -> Option<&str> {
        self.batch.as_deref()
    }

    /// Returns the adopted machine, if any part constrained it.
    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }

    /// Remaining fiber headroom under the given limits, in cc.
    pub fn remaining_fiber_cc(&self, limits: &CapacityLimits) -> f64 {
        (limits.max_fiber_cc - self.fiber_used).max(0.0)
    }

    /// Remaining matrix headroom under the given limits, in cc.
    pub fn remaining_matrix_cc(&self, limits: &CapacityLimits) -> f64 {
        (limits.max_matrix_cc - self.matrix_used).max(0.0)
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} parts, {:.1} cc fiber, {:.1} cc matrix",
            self.parts.len(),
            self.fiber_used,
            self.matrix_used
        )
    }
}

fn compatible(adopted: Option<&str>, requested: Option<&str>) -> bool {
    match (adopted, requested) {
        (Some(a), Some(r)) => a == r,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Orientation;

    #[test]
    fn test_push_updates_totals() {
        let mut build = Build::new();
        build.push(
            Part::new("D3039-XY-B0-M0-S0", 3.0, 40.0).with_print_time(Duration::from_secs(3600)),
        );
        build.push(
            Part::new("D3039-XY-B0-M0-S1", 2.0, 35.0).with_print_time(Duration::from_secs(1800)),
        );

        assert_eq!(build.len(), 2);
        assert!((build.fiber_used() - 5.0).abs() < 1e-9);
        assert!((build.matrix_used() - 75.0).abs() < 1e-9);
        assert_eq!(build.sample_total(), 0);
        assert_eq!(build.print_time(), Duration::from_secs(5400));
    }

    #[test]
    fn test_accepts_material_limits() {
        let limits = CapacityLimits::new().with_max_fiber(10.0).with_max_matrix(100.0);
        let mut build = Build::new();
        build.push(Part::new("a", 6.0, 50.0));

        assert!(build.accepts(&Part::new("b", 4.0, 50.0), &limits));
        assert!(!build.accepts(&Part::new("c", 4.1, 10.0), &limits));
        assert!(!build.accepts(&Part::new("d", 1.0, 50.1), &limits));
    }

    #[test]
    fn test_sample_ceiling_applies_to_tubes_only() {
        let limits = CapacityLimits::new().with_target_samples(2);
        let mut build = Build::new();
        build.push(
            Part::new("tube-0", 1.0, 10.0)
                .with_orientation(Orientation::Zx)
                .with_sample_count(2),
        );

        assert_eq!(build.sample_total(), 2);

        let another_tube = Part::new("tube-1", 1.0, 10.0)
            .with_orientation(Orientation::Zx)
            .with_sample_count(2);
        assert!(!build.accepts(&another_tube, &limits));

        // A flat coupon ignores sample headroom entirely.
        let coupon = Part::new("flat-0", 1.0, 10.0).with_sample_count(3);
        assert!(build.accepts(&coupon, &limits));
        build.push(coupon);
        assert_eq!(build.sample_total(), 2);
    }

    #[test]
    fn test_batch_and_machine_adoption() {
        let limits = CapacityLimits::default();
        let mut build = Build::new();

        assert_eq!(build.batch(), None);
        build.push(Part::new("a", 1.0, 10.0).with_batch("A").with_machine("1"));
        assert_eq!(build.batch(), Some("A"));
        assert_eq!(build.machine(), Some("1"));

        assert!(build.accepts(&Part::new("b", 1.0, 10.0).with_batch("A"), &limits));
        assert!(!build.accepts(&Part::new("c", 1.0, 10.0).with_batch("B"), &limits));
        assert!(!build.accepts(&Part::new("d", 1.0, 10.0).with_machine("2"), &limits));

        // Unconstrained parts fit any adopted build.
        assert!(build.accepts(&Part::new("e", 1.0, 10.0), &limits));
    }

    #[test]
    fn test_remaining_headroom() {
        let limits = CapacityLimits::new().with_max_fiber(10.0).with_max_matrix(100.0);
        let mut build = Build::new();
        build.push(Part::new("a", 6.0, 80.0));

        assert!((build.remaining_fiber_cc(&limits) - 4.0).abs() < 1e-9);
        assert!((build.remaining_matrix_cc(&limits) - 20.0).abs() < 1e-9);
    }
}
