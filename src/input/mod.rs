use macroquad::prelude::*;

use crate::application::{Camera, Simulation};
use crate::ui::{Menu, MenuRequest};

const ORBIT_SPEED: f32 = 1.5;
const DRAG_SENSITIVITY: f32 = 0.005;
const ZOOM_FACTOR: f32 = 1.1;

/// Per-frame input state that has to survive between frames
#[derive(Default)]
pub struct Controls {
    last_mouse: Option<(f32, f32)>,
}

/// Orbit with WASD or right-drag, zoom with the wheel, H to reset
pub fn handle_camera(camera: &mut Camera, controls: &mut Controls, dt: f32) {
    let step = ORBIT_SPEED * dt;
    let keys = [
        (KeyCode::A, -step, 0.0),
        (KeyCode::D, step, 0.0),
        (KeyCode::W, 0.0, step),
        (KeyCode::S, 0.0, -step),
    ];
    for (key, d_yaw, d_pitch) in keys {
        if is_key_down(key) {
            camera.orbit(d_yaw, d_pitch);
        }
    }

    let mouse = mouse_position();
    if is_mouse_button_down(MouseButton::Right) {
        if let Some(last) = controls.last_mouse {
            camera.orbit(
                -(mouse.0 - last.0) * DRAG_SENSITIVITY,
                (mouse.1 - last.1) * DRAG_SENSITIVITY,
            );
        }
        controls.last_mouse = Some(mouse);
    } else {
        controls.last_mouse = None;
    }

    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(ZOOM_FACTOR);
    } else if wheel < 0.0 {
        camera.zoom_out(ZOOM_FACTOR);
    }

    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Tab opens the menu; arrows navigate and edit, digits type a seed,
/// Enter applies. Returns true when the lattice was rebuilt.
pub fn handle_menu(menu: &mut Menu, sim: &mut Simulation) -> bool {
    if is_key_pressed(KeyCode::Tab) {
        menu.toggle();
        menu.sync(sim.lattice_config(), sim.config().tick_interval);
    }

    // Drain typed characters every frame so nothing stale is replayed later
    let typed: Vec<char> = std::iter::from_fn(get_char_pressed).collect();
    if !menu.is_visible() {
        return false;
    }

    if is_key_pressed(KeyCode::Down) {
        menu.select_next();
    }
    if is_key_pressed(KeyCode::Up) {
        menu.select_prev();
    }
    if is_key_pressed(KeyCode::Right) {
        menu.adjust(1);
    }
    if is_key_pressed(KeyCode::Left) {
        menu.adjust(-1);
    }
    if is_key_pressed(KeyCode::Backspace) {
        menu.backspace();
    }
    typed.into_iter().for_each(|c| menu.type_char(c));

    if !is_key_pressed(KeyCode::Enter) {
        return false;
    }

    let mut rebuilt = false;
    for request in menu.confirm(sim.lattice_config(), sim.config().tick_interval) {
        let result = match request {
            MenuRequest::Rebuild(config) => sim.reconfigure(config),
            MenuRequest::SetInterval(seconds) => sim.set_tick_interval(seconds),
        };
        match result {
            Ok(()) => rebuilt |= matches!(request, MenuRequest::Rebuild(_)),
            Err(err) => log::error!("could not apply settings: {err}"),
        }
    }
    menu.sync(sim.lattice_config(), sim.config().tick_interval);
    rebuilt
}

/// Simulation hotkeys, ignored while the menu is open.
/// Returns true when the lattice was rebuilt.
pub fn process_keyboard_input(sim: &mut Simulation, menu: &Menu) -> bool {
    if menu.is_visible() {
        return false;
    }

    if is_key_pressed(KeyCode::Space) {
        sim.toggle_running();
    }
    if is_key_pressed(KeyCode::N) && !sim.is_running() {
        sim.step_generation();
    }
    if is_key_pressed(KeyCode::B) {
        sim.set_boundary(sim.config().boundary.toggled());
    }
    if is_key_pressed(KeyCode::P) {
        sim.set_strategy(sim.config().strategy.toggled());
    }
    if is_key_pressed(KeyCode::R) {
        match sim.reseed(::rand::random_range(1..=u64::from(u32::MAX))) {
            Ok(()) => return true,
            Err(err) => log::error!("reseed failed: {err}"),
        }
    }
    false
}
