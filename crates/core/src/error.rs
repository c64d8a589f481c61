//! Error types for buildplan.

use thiserror::Error;

use crate::part::{Material, PartId};

/// Result type alias for buildplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a build plan.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid part definition.
    #[error("Invalid part: {0}")]
    InvalidPart(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// A single part exceeds a per-build material ceiling, so no build,
    /// fresh or not, could ever accept it.
    #[error("part {part} requires {required} cc of {material}, above the per-build limit of {limit} cc")]
    InfeasiblePart {
        /// The offending part.
        part: PartId,
        /// Which consumable is exceeded.
        material: Material,
        /// The part's requirement in cc.
        required: f64,
        /// The configured per-build ceiling in cc.
        limit: f64,
    },

    /// A tube part alone carries more samples than one build may hold.
    #[error("part {part} carries {samples} samples, above the per-build sample target of {target}")]
    InfeasibleSampleCount {
        /// The offending part.
        part: PartId,
        /// Samples cut from the part's tube.
        samples: u32,
        /// The configured per-build sample ceiling.
        target: u32,
    },
}
