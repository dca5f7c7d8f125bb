use macroquad::prelude::*;

use crate::application::{Camera, FOV_Y, Simulation};
use crate::ui::{HUD_FONT, HUD_LINE, HUD_TOP, HUD_X, SPHERE_SCALE};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

fn to_mq(v: ::glam::Vec3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

/// Draw every visible cell as a sphere sized by its radius and tinted with
/// its group color
pub fn draw_lattice(sim: &Simulation, camera: &Camera) {
    set_camera(&Camera3D {
        position: to_mq(camera.position()),
        target: to_mq(camera.target),
        up: vec3(0.0, 1.0, 0.0),
        fovy: FOV_Y,
        ..Default::default()
    });

    let lattice = sim.lattice();
    let scale = lattice.spacing() * SPHERE_SCALE;
    let positions = lattice.positions();
    let radii = sim.radii();
    let colors = sim.colors();

    for ((position, radius), [r, g, b]) in positions.iter().zip(&radii).zip(&colors) {
        if *radius <= 0.0 {
            continue;
        }
        draw_sphere(to_mq(*position), radius * scale, None, Color::new(*r, *g, *b, 1.0));
    }

    set_default_camera();
}

/// Status overlay: FPS, alive spheres, generation and simulation settings
pub fn draw_hud(sim: &Simulation) {
    let config = sim.config();
    let lines = [
        format!("FPS: {:.2}", get_fps()),
        format!(
            "Spheres: {}/{}",
            format_number(sim.alive_count()),
            format_number(sim.lattice().len())
        ),
        format!("Generation #: {}", sim.generation()),
        format!("Groups: {} (largest {})", sim.groups().len(), sim.groups().largest()),
        format!(
            "{} | {} | {} | {:.1}ms{}",
            config.rule,
            config.boundary.name(),
            config.strategy.name(),
            sim.last_tick_ms,
            if sim.is_running() { "" } else { " | Paused" }
        ),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, HUD_X, HUD_TOP + HUD_LINE * i as f32, HUD_FONT, WHITE);
    }
}
