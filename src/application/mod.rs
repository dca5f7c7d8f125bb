mod camera;
mod simulation;

pub use camera::{Camera, FOV_Y};
pub use simulation::Simulation;
