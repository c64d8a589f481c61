//! # Buildplan Packer
//!
//! Seeded randomized assignment of test parts to print builds under
//! per-build capacity ceilings.
//!
//! The packer takes parts in descending priority order (fiber volume first,
//! matrix volume as tie-break), draws an eligible build uniformly at random
//! from one shared seeded stream, and spawns a new build whenever no
//! existing one has headroom. The same seed and input always reproduce the
//! same plan.
//!
//! ## Quick Start
//!
//! ```rust
//! use buildplan_packer::{BuildPacker, Orientation, PackerConfig, Part};
//!
//! let parts = vec![
//!     Part::new("D3039-XY-B0-M0-S0", 4.0, 60.0),
//!     Part::new("D6641-ZX-B0-M0-S0", 2.5, 35.0)
//!         .with_orientation(Orientation::Zx)
//!         .with_sample_count(2),
//! ];
//!
//! let packer = BuildPacker::new(PackerConfig::new().with_seed(7));
//! let plan = packer.pack(&parts).unwrap();
//!
//! assert_eq!(plan.part_count(), 2);
//! assert_eq!(plan.seed, 7);
//! ```

pub mod packer;

// Re-exports
pub use buildplan_core::{
    Build, CapacityLimits, Error, Material, Orientation, PackResult, PackSummary, Part, Result,
};
pub use packer::{BuildPacker, PackerConfig};
