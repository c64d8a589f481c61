//! Pack result representation.

use std::fmt;
use std::time::Duration;

use crate::build::Build;
use crate::limits::CapacityLimits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Finalized build plan produced by a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// All builds in creation order, including any still empty.
    pub builds: Vec<Build>,

    /// The seed the random stream was initialized with. Echoed so an
    /// unseeded run can still be reproduced.
    pub seed: u64,

    /// Builds spawned on demand beyond the configured minimum.
    pub builds_spawned: usize,
}

impl PackResult {
    /// Returns the number of builds, counting empty ones.
    pub fn build_count(&self) -> usize {
        self.builds.len()
    }

    /// Returns the total number of assigned parts across all builds.
    pub fn part_count(&self) -> usize {
        self.builds.iter().map(Build::len).sum()
    }

    /// Returns the total fiber consumption across all builds, in cc.
    pub fn total_fiber_cc(&self) -> f64 {
        self.builds.iter().map(Build::fiber_used).sum()
    }

    /// Returns the total matrix consumption across all builds, in cc.
    pub fn total_matrix_cc(&self) -> f64 {
        self.builds.iter().map(Build::matrix_used).sum()
    }

    /// Returns the total print time across all builds.
    pub fn total_print_time(&self) -> Duration {
        self.builds.iter().map(Build::print_time).sum()
    }

    /// Fraction of the plan's fiber capacity consumed (0.0 - 1.0).
    pub fn fiber_utilization(&self, limits: &CapacityLimits) -> f64 {
        if self.builds.is_empty() {
            return 0.0;
        }
        self.total_fiber_cc() / (limits.max_fiber_cc * self.builds.len() as f64)
    }

    /// Fraction of the plan's matrix capacity consumed (0.0 - 1.0).
    pub fn matrix_utilization(&self, limits: &CapacityLimits) -> f64 {
        if self.builds.is_empty() {
            return 0.0;
        }
        self.total_matrix_cc() / (limits.max_matrix_cc * self.builds.len() as f64)
    }

    /// Summarizes the plan for reporting.
    pub fn summary(&self) -> PackSummary {
        PackSummary::from(self)
    }
}

/// Statistics for a single build in a plan.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuildStats {
    /// Index of the build (0-based, creation order).
    pub index: usize,
    /// Number of parts assigned.
    pub part_count: usize,
    /// Fiber consumed, in cc.
    pub fiber_cc: f64,
    /// Matrix consumed, in cc.
    pub matrix_cc: f64,
    /// Tube samples held.
    pub sample_total: u32,
    /// Accumulated print time.
    pub print_time: Duration,
}

/// Summary statistics for a whole plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Seed the plan was generated with.
    pub seed: u64,
    /// Number of builds, counting empty ones.
    pub build_count: usize,
    /// Total number of assigned parts.
    pub part_count: usize,
    /// Total fiber consumption, in cc.
    pub total_fiber_cc: f64,
    /// Total matrix consumption, in cc.
    pub total_matrix_cc: f64,
    /// Total print time.
    pub total_print_time: Duration,
    /// Per-build statistics.
    pub per_build: Vec<BuildStats>,
}

impl From<&PackResult> for PackSummary {
    fn from(result: &PackResult) -> Self {
        let per_build = result
            .builds
            .iter()
            .enumerate()
            .map(|(index, build)| BuildStats {
                index,
                part_count: build.len(),
                fiber_cc: build.fiber_used(),
                matrix_cc: build.matrix_used(),
                sample_total: build.sample_total(),
                print_time: build.print_time(),
            })
            .collect();

        Self {
            seed: result.seed,
            build_count: result.build_count(),
            part_count: result.part_count(),
            total_fiber_cc: result.total_fiber_cc(),
            total_matrix_cc: result.total_matrix_cc(),
            total_print_time: result.total_print_time(),
            per_build,
        }
    }
}

impl fmt::Display for PackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for build in &self.per_build {
            writeln!(
                f,
                "- B-{}: {} parts  {:.1} cc fiber  {:.1} cc matrix  ({})",
                build.index,
                build.part_count,
                build.fiber_cc,
                build.matrix_cc,
                format_hms(build.print_time)
            )?;
        }
        write!(
            f,
            "{} parts in {} builds (seed {})",
            self.part_count, self.build_count, self.seed
        )
    }
}

fn format_hms(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
