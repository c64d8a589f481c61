//! # Buildplan Core
//!
//! Core data model for the buildplan batch-planning engine.
//!
//! This crate provides the types shared by the packing algorithm and any
//! surrounding glue: parts, builds, capacity limits, and pack results.
//!
//! ## Core Components
//!
//! - **Parts**: [`Part`], [`Orientation`], [`Material`]
//! - **Builds**: [`Build`] - append-only batches with running totals
//! - **Limits**: [`CapacityLimits`] - per-build ceilings
//! - **Results**: [`PackResult`], [`PackSummary`], [`BuildStats`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use buildplan_core::{CapacityLimits, Part};
//!
//! let limits = CapacityLimits::new()
//!     .with_max_fiber(45.0)
//!     .with_max_matrix(750.0)
//!     .with_target_samples(5);
//!
//! let part = Part::new("D3039-XY-B0-M0-S0", 3.2, 41.0);
//! assert!(part.validate().is_ok());
//! assert!(limits.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod build;
pub mod error;
pub mod limits;
pub mod part;
pub mod result;

// Re-exports
pub use build::Build;
pub use error::{Error, Result};
pub use limits::CapacityLimits;
pub use part::{Material, Orientation, Part, PartId};
pub use result::{BuildStats, PackResult, PackSummary};
