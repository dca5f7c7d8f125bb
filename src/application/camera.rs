use glam::Vec3;

/// Vertical field of view used to frame the lattice
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

const PITCH_LIMIT: f32 = 1.5;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 500.0;

/// Orbit camera circling the center of the lattice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    /// Rotation around the vertical axis, radians
    pub yaw: f32,
    /// Elevation, radians, clamped short of the poles
    pub pitch: f32,
    pub distance: f32,
    home: (Vec3, f32),
}

impl Camera {
    /// Camera looking at the middle of a lattice of the given size, backed
    /// off far enough that the longest side fits the field of view.
    pub fn framing(n: usize, m: usize, spacing: f32) -> Self {
        let width = n.saturating_sub(1) as f32 * spacing;
        let height = m.saturating_sub(1) as f32 * spacing;
        let target = Vec3::new(width / 2.0, height / 2.0, width / 2.0);
        let largest = width.max(height).max(spacing);
        let distance = ((largest / 2.0) / (FOV_Y / 2.0).tan() * 1.5).clamp(MIN_DISTANCE, MAX_DISTANCE);

        Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance,
            home: (target, distance),
        }
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.distance = (self.distance / factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.distance
    }

    /// Reset camera to its framing position
    pub fn reset(&mut self) {
        (self.target, self.distance) = self.home;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
