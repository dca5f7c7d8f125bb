// Domain layer - automaton, animation and grouping
pub mod domain;

// Application layer - frame driver and camera
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Boundary, Cell, EvalStrategy, Lattice, LifeRule};
pub use application::{Camera, Simulation};
pub use config::{LatticeConfig, SimConfig};
pub use error::ConfigError;
