use rand::{SeedableRng, rngs::StdRng};

use crate::config::{LatticeConfig, SimConfig, validate_tick_interval};
use crate::domain::{Boundary, EvalStrategy, Groups, Lattice, analyze, animate, evaluate, sanitize_dt};
use crate::error::ConfigError;

/// Simulation orchestrates the automaton frame by frame.
///
/// It owns the lattice and everything that changes over time: the time
/// accumulated toward the next generation, the generation counter and the
/// random source for group colors. Callers feed it frame deltas and read back
/// per-cell radius and color arrays.
pub struct Simulation {
    lattice: Lattice,
    lattice_config: LatticeConfig,
    config: SimConfig,
    generation: u64,
    accumulator: f32,
    is_running: bool,
    groups: Groups,
    color_rng: StdRng,
    /// Wall time of the last rule + connectivity pass
    pub last_tick_ms: f32,
}

impl Simulation {
    /// Validate both configs and build the initial lattice. The initial
    /// pattern is grouped and colored right away so the first frame has
    /// colors to show.
    pub fn new(lattice_config: LatticeConfig, config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::build(&lattice_config)?;
        let mut sim = Self {
            lattice,
            lattice_config,
            config,
            generation: 0,
            accumulator: 0.0,
            is_running: true,
            groups: Groups::default(),
            color_rng: StdRng::from_os_rng(),
            last_tick_ms: 0.0,
        };
        sim.regroup();
        Ok(sim)
    }

    /// Replace the color source with a seeded one (builder pattern).
    /// Colors are then reproducible, which the tests rely on.
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_rng = StdRng::seed_from_u64(seed);
        self.regroup();
        self
    }

    /// Advance by one frame and return the generation count.
    ///
    /// When the accumulated time reaches the tick interval a generation
    /// fires: next states are computed, then groups and colors are rebuilt
    /// from the committed states. The animation step runs on every frame
    /// afterwards and is the only place states get committed.
    pub fn tick(&mut self, dt: f32) -> u64 {
        let dt = sanitize_dt(dt);

        if self.is_running {
            self.accumulator += dt;
            if self.accumulator >= self.config.tick_interval {
                self.step_generation();
            }
        }

        animate(&mut self.lattice, self.config.animation_speed, dt);
        self.generation
    }

    /// Fire a generation immediately, regardless of the accumulator
    pub fn step_generation(&mut self) {
        let start = std::time::Instant::now();

        let changed = evaluate(
            &mut self.lattice,
            &self.config.rule,
            self.config.boundary,
            self.config.strategy,
        );
        self.regroup();

        self.accumulator = 0.0;
        self.generation += 1;
        self.last_tick_ms = start.elapsed().as_secs_f32() * 1000.0;

        log::debug!(
            "generation {}: {} alive, {} changing, {} groups",
            self.generation,
            self.lattice.alive_count(),
            changed,
            self.groups.len()
        );
    }

    fn regroup(&mut self) {
        self.groups = analyze(&mut self.lattice, &mut self.color_rng);
    }

    /// Discard the lattice and build a new one from `lattice_config`.
    /// On rejection the current lattice is kept untouched.
    pub fn reconfigure(&mut self, lattice_config: LatticeConfig) -> Result<(), ConfigError> {
        let lattice = Lattice::build(&lattice_config).inspect_err(|err| {
            log::warn!("rejected lattice reconfiguration: {err}");
        })?;
        self.lattice = lattice;
        self.lattice_config = lattice_config;
        self.generation = 0;
        self.accumulator = 0.0;
        self.regroup();
        Ok(())
    }

    /// Rebuild the current lattice shape with a new seed
    pub fn reseed(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.reconfigure(self.lattice_config.with_seed(seed))
    }

    pub fn set_tick_interval(&mut self, seconds: f32) -> Result<(), ConfigError> {
        validate_tick_interval(seconds).inspect_err(|err| {
            log::warn!("rejected tick interval: {err}");
        })?;
        self.config.tick_interval = seconds;
        Ok(())
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.config.boundary = boundary;
    }

    pub fn set_strategy(&mut self, strategy: EvalStrategy) {
        self.config.strategy = strategy;
    }

    /// Pause or resume generation ticks. Running animations still finish.
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn lattice_config(&self) -> &LatticeConfig {
        &self.lattice_config
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Groups found by the most recent connectivity pass
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn radii(&self) -> Vec<f32> {
        self.lattice.radii()
    }

    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.lattice.colors()
    }

    pub fn alive_count(&self) -> usize {
        self.lattice.alive_count()
    }
}
