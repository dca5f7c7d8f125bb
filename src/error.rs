use thiserror::Error;

/// Rejections produced when validating lattice or simulation parameters.
/// A rejected request never touches the running simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lattice dimension {axis} must be positive")]
    ZeroDimension { axis: &'static str },

    #[error("lattice of {n}x{m}x{n} cells is too large")]
    LatticeTooLarge { n: usize, m: usize },

    #[error("spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f32),

    #[error("alive probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("tick interval must be a positive finite number of seconds, got {0}")]
    InvalidTickInterval(f32),

    #[error("animation speed must be a positive finite number, got {0}")]
    InvalidAnimationSpeed(f32),
}
