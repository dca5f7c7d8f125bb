use glam::Vec3;

/// Lilac used for cells that have never been assigned a group color.
pub const DEFAULT_COLOR: Vec3 = Vec3::new(0.784, 0.635, 0.784);

/// One lattice site: a fixed position plus logical and visual state.
///
/// `current` is the committed state, `next` the result of the latest rule
/// pass. The two only disagree while the radius is travelling toward the
/// bound implied by `next`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    position: Vec3,
    pub current: bool,
    pub next: bool,
    /// Visual commitment in [0, 1]: 0 fully dead, 1 fully alive
    pub radius: f32,
    pub animating: bool,
    pub color: Vec3,
    /// Connected component id, only set while `current` is true
    pub group: Option<u32>,
}

impl Cell {
    /// Create a settled cell, either fully alive or fully dead
    pub fn new(position: Vec3, alive: bool) -> Self {
        Self {
            position,
            current: alive,
            next: alive,
            radius: if alive { 1.0 } else { 0.0 },
            animating: false,
            color: DEFAULT_COLOR,
            group: None,
        }
    }

    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Committed alive and still visible
    pub fn is_visibly_alive(&self) -> bool {
        self.current && self.radius > 0.0
    }

    /// Radius the animation is heading toward
    pub const fn target_radius(&self) -> f32 {
        if self.next { 1.0 } else { 0.0 }
    }
}
