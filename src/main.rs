use macroquad::prelude::*;
use bubble_life::{
    Camera, Simulation,
    config::{LatticeConfig, SimConfig},
    input::{self, Controls},
    rendering,
    ui::{self, Menu},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "BubbleLife".to_owned(),
        window_width: ui::WINDOW_WIDTH,
        window_height: ui::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Fresh pillar every launch, like pressing R
    let lattice_config = LatticeConfig::default().with_seed(::rand::random_range(1..=u64::from(u32::MAX)));

    let mut sim = match Simulation::new(lattice_config, SimConfig::default()) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("invalid startup configuration: {err}");
            return;
        }
    };
    let mut camera = framing(&sim);
    let mut controls = Controls::default();
    let mut menu = Menu::new(sim.lattice_config(), sim.config().tick_interval);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        let dt = get_frame_time();

        let rebuilt = input::handle_menu(&mut menu, &mut sim) | input::process_keyboard_input(&mut sim, &menu);
        if rebuilt {
            camera = framing(&sim);
        }
        input::handle_camera(&mut camera, &mut controls, dt);

        sim.tick(dt);

        clear_background(BLACK);
        rendering::draw_lattice(&sim, &camera);
        rendering::draw_hud(&sim);
        menu.draw(ui::HUD_X, ui::MENU_TOP);

        next_frame().await;
    }
}

fn framing(sim: &Simulation) -> Camera {
    let (n, m) = sim.lattice().dimensions();
    Camera::framing(n, m, sim.lattice().spacing())
}
