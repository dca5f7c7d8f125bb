mod menu;

pub use menu::{Menu, MenuItem, MenuRequest, parse_seed};

// Overlay layout
pub const HUD_X: f32 = 5.0;
pub const HUD_TOP: f32 = 24.0;
pub const HUD_LINE: f32 = 25.0;
pub const HUD_FONT: f32 = 24.0;
pub const MENU_TOP: f32 = 200.0;

/// Sphere radius on screen relative to lattice spacing, at full commitment
pub const SPHERE_SCALE: f32 = 0.45;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
