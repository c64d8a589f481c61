//! # Buildplan
//!
//! Seeded, capacity-constrained assignment of manufactured test parts to
//! print builds.
//!
//! Given a list of parts with fiber and matrix requirements, the packer
//! produces a plan of builds that respects per-build material ceilings and
//! the sample ceiling for tube (ZX) parts. The same seed and input always
//! reproduce the same plan, so an experiment design can be regenerated at
//! will while still spreading parts pseudo-randomly across builds.
//!
//! ## Quick Start
//!
//! ```rust
//! use buildplan::{BuildPacker, CapacityLimits, Orientation, PackerConfig, Part};
//!
//! let parts = vec![
//!     Part::new("D3039-XY-B0-M0-S0", 4.0, 60.0),
//!     Part::new("D3039-XY-B0-M0-S1", 4.0, 60.0),
//!     Part::new("D6641-ZX-B0-M0-S0", 2.5, 35.0)
//!         .with_orientation(Orientation::Zx)
//!         .with_sample_count(2),
//! ];
//!
//! let config = PackerConfig::new()
//!     .with_min_builds(1)
//!     .with_limits(CapacityLimits::default())
//!     .with_seed(7);
//!
//! let plan = BuildPacker::new(config).pack(&parts).unwrap();
//! println!("{}", plan.summary());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support across the data model

/// Core data model: parts, builds, limits, results.
pub use buildplan_core as core;

/// The packing algorithm.
pub use buildplan_packer as packer;

// Re-export commonly used types at root level
pub use buildplan_core::{
    Build, BuildStats, CapacityLimits, Error, Material, Orientation, PackResult, PackSummary,
    Part, PartId, Result,
};
pub use buildplan_packer::{BuildPacker, PackerConfig};
