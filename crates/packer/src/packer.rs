//! Randomized build packing.

use rand::prelude::*;

use buildplan_core::{Build, CapacityLimits, Error, Material, PackResult, Part, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackerConfig {
    /// Number of empty builds to start the plan with.
    pub min_builds: usize,

    /// Per-build capacity ceilings.
    pub limits: CapacityLimits,

    /// Random seed for reproducibility (None = drawn from entropy).
    pub seed: Option<u64>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            min_builds: 1,
            limits: CapacityLimits::default(),
            seed: None,
        }
    }
}

impl PackerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of builds to start with.
    pub fn with_min_builds(mut self, min_builds: usize) -> Self {
        self.min_builds = min_builds;
        self
    }

    /// Sets the per-build capacity ceilings.
    pub fn with_limits(mut self, limits: CapacityLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_builds == 0 {
            return Err(Error::InvalidConfig(
                "at least one build is required".into(),
            ));
        }
        self.limits.validate()
    }
}

/// Assigns parts to builds by seeded random draw among eligible builds.
///
/// Parts are taken in descending fiber order, with matrix volume breaking
/// ties, so the hardest-to-place parts land while every build still has
/// headroom. A part with no eligible build spawns a fresh one.
pub struct BuildPacker {
    config: PackerConfig,
}

impl BuildPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: PackerConfig) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(PackerConfig::default())
    }

    /// Returns the packer's configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Assigns every part to exactly one build.
    ///
    /// The same configuration, seed, and input order always produce the
    /// same plan. Fails without a partial result if the configuration is
    /// invalid or any single part could never fit an empty build.
    pub fn pack(&self, parts: &[Part]) -> Result<PackResult> {
        self.config.validate()?;
        if parts.is_empty() {
            return Err(Error::InvalidConfig("no parts to assign".into()));
        }

        let limits = &self.config.limits;
        for part in parts {
            part.validate()?;
            check_feasible(part, limits)?;
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        log::info!(
            "packing {} parts across at least {} builds (seed {})",
            parts.len(),
            self.config.min_builds,
            seed
        );

        // Stable sort keeps equal parts in input order.
        let mut ordered: Vec<&Part> = parts.iter().collect();
        ordered.sort_by(|a, b| {
            b.fiber_cc()
                .total_cmp(&a.fiber_cc())
                .then(b.matrix_cc().total_cmp(&a.matrix_cc()))
        });

        let mut builds: Vec<Build> = (0..self.config.min_builds).map(|_| Build::new()).collect();
        let mut spawned = 0;

        for part in ordered {
            let eligible: Vec<usize> = builds
                .iter()
                .enumerate()
                .filter(|(_, build)| build.accepts(part, limits))
                .map(|(index, _)| index)
                .collect();

            let index = match eligible.choose(&mut rng) {
                Some(&index) => index,
                None => {
                    // Pre-flight guarantees a fresh build takes the part.
                    log::debug!(
                        "no eligible build for {}, spawning build {}",
                        part.id(),
                        builds.len()
                    );
                    builds.push(Build::new());
                    spawned += 1;
                    builds.len() - 1
                }
            };

            builds[index].push(part.clone());
            log::debug!("assigned {} to build {}", part.id(), index);
        }

        Ok(PackResult {
            builds,
            seed,
            builds_spawned: spawned,
        })
    }
}

fn check_feasible(part: &Part, limits: &CapacityLimits) -> Result<()> {
    if part.fiber_cc() > limits.max_fiber_cc {
        return Err(Error::InfeasiblePart {
            part: part.id().clone(),
            material: Material::Fiber,
            required: part.fiber_cc(),
            limit: limits.max_fiber_cc,
        });
    }

    if part.matrix_cc() > limits.max_matrix_cc {
        return Err(Error::InfeasiblePart {
            part: part.id().clone(),
            material: Material::Matrix,
            required: part.matrix_cc(),
            limit: limits.max_matrix_cc,
        });
    }

    if part.orientation().is_tube() && part.sample_count() > limits.target_samples {
        return Err(Error::InfeasibleSampleCount {
            part: part.id().clone(),
            samples: part.sample_count(),
            target: limits.target_samples,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PackerConfig::default();
        assert_eq!(config.min_builds, 1);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PackerConfig::new()
            .with_min_builds(3)
            .with_limits(CapacityLimits::new().with_max_fiber(10.0))
            .with_seed(42);

        assert_eq!(config.min_builds, 3);
        assert_eq!(config.limits.max_fiber_cc, 10.0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_config_rejects_zero_builds() {
        let config = PackerConfig::new().with_min_builds(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_single_part_lands_in_first_build() {
        let packer = BuildPacker::new(PackerConfig::new().with_seed(7));
        let plan = packer.pack(&[Part::new("D3039-XY-B0-M0-S0", 3.0, 40.0)]).unwrap();

        assert_eq!(plan.build_count(), 1);
        assert_eq!(plan.builds_spawned, 0);
        assert_eq!(plan.builds[0].len(), 1);
        assert_eq!(plan.seed, 7);
    }

    #[test]
    fn test_feasibility_checked_before_any_assignment() {
        let limits = CapacityLimits::new().with_max_fiber(5.0);
        let packer = BuildPacker::new(PackerConfig::new().with_limits(limits));
        let parts = vec![
            Part::new("fits", 3.0, 40.0),
            Part::new("too-big", 6.0, 40.0),
        ];

        let err = packer.pack(&parts).unwrap_err();
        assert!(matches!(
            err,
            Error::InfeasiblePart {
                material: Material::Fiber,
                ..
            }
        ));
    }
}
