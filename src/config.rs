//! Simulation parameters and their validation.
//!
//! Defaults mirror the pillar the viewer opens with: a 10x20x10 lattice,
//! 1.5 units apart, 40% of cells alive, one generation per second.

use crate::domain::{ANIMATION_SPEED, Boundary, EvalStrategy, LifeRule};
use crate::error::ConfigError;

pub const DEFAULT_N: usize = 10;
pub const DEFAULT_M: usize = 20;
pub const DEFAULT_SPACING: f32 = 1.5;
pub const DEFAULT_SEED: u64 = 1;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.4;
pub const DEFAULT_TICK_INTERVAL: f32 = 1.0;

/// Shape and seeding of a lattice. Changing any of these means a full rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeConfig {
    /// Extent along x and z.
    pub n: usize,
    /// Extent along y (pillar height).
    pub m: usize,
    pub spacing: f32,
    pub seed: u64,
    pub alive_probability: f64,
}

impl LatticeConfig {
    pub fn new(n: usize, m: usize, spacing: f32, seed: u64) -> Self {
        Self {
            n,
            m,
            spacing,
            seed,
            ..Self::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of cells, `None` on overflow
    pub fn cell_count(&self) -> Option<usize> {
        self.n.checked_mul(self.m)?.checked_mul(self.n)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::ZeroDimension { axis: "N" });
        }
        if self.m == 0 {
            return Err(ConfigError::ZeroDimension { axis: "M" });
        }
        if self.cell_count().is_none() {
            return Err(ConfigError::LatticeTooLarge { n: self.n, m: self.m });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            m: DEFAULT_M,
            spacing: DEFAULT_SPACING,
            seed: DEFAULT_SEED,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
        }
    }
}

/// Runtime knobs of the driver. These can change without a rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Seconds between generations
    pub tick_interval: f32,
    /// Radius units per second
    pub animation_speed: f32,
    pub boundary: Boundary,
    pub strategy: EvalStrategy,
    pub rule: LifeRule,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tick_interval(self.tick_interval)?;
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(ConfigError::InvalidAnimationSpeed(self.animation_speed));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            animation_speed: ANIMATION_SPEED,
            boundary: Boundary::default(),
            strategy: EvalStrategy::default(),
            rule: LifeRule::default(),
        }
    }
}

pub fn validate_tick_interval(seconds: f32) -> Result<(), ConfigError> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTickInterval(seconds))
    }
}
