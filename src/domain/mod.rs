mod animation;
mod boundary;
mod cell;
mod engine;
mod lattice;
mod rules;
mod strategy;
pub mod connectivity;

pub use animation::{ANIMATION_SPEED, animate, sanitize_dt};
pub use boundary::Boundary;
pub use cell::{Cell, DEFAULT_COLOR};
pub use connectivity::{Groups, analyze};
pub use engine::{evaluate, next_states, next_states_parallel};
pub use lattice::{Coord, Lattice};
pub use rules::{LifeRule, Thresholds};
pub use strategy::EvalStrategy;
