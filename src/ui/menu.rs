use macroquad::prelude::*;

use crate::config::LatticeConfig;

const MIN_INTERVAL: f32 = 0.1;
const MAX_INTERVAL: f32 = 10.0;
const INTERVAL_STEP: f32 = 0.1;
const MAX_SIDE: usize = 64;

/// Editable rows of the settings menu, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    PillarN,
    PillarM,
    Seed,
    GenerationSpeed,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::PillarN,
        MenuItem::PillarM,
        MenuItem::Seed,
        MenuItem::GenerationSpeed,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|&i| i == self).unwrap_or(0)
    }
}

/// What the caller should do after the user confirms the menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuRequest {
    /// Shape or seed changed, rebuild the lattice
    Rebuild(LatticeConfig),
    /// Only the generation interval changed
    SetInterval(f32),
}

/// Tab-toggled settings overlay. Holds pending values until confirmed.
#[derive(Clone, Debug)]
pub struct Menu {
    visible: bool,
    selected: MenuItem,
    pub n: usize,
    pub m: usize,
    pub seed: u64,
    pub interval: f32,
    seed_input: String,
}

/// Parse typed seed digits. Anything unparsable or below 1 becomes 1.
pub fn parse_seed(input: &str) -> u64 {
    input.trim().parse::<u64>().ok().filter(|&s| s >= 1).unwrap_or(1)
}

impl Menu {
    pub fn new(config: &LatticeConfig, interval: f32) -> Self {
        Self {
            visible: false,
            selected: MenuItem::PillarN,
            n: config.n,
            m: config.m,
            seed: config.seed,
            interval,
            seed_input: String::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.seed_input.clear();
    }

    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.commit_seed_input();
        let i = (self.selected.position() + 1) % MenuItem::ALL.len();
        self.selected = MenuItem::ALL[i];
    }

    pub fn select_prev(&mut self) {
        self.commit_seed_input();
        let len = MenuItem::ALL.len();
        let i = (self.selected.position() + len - 1) % len;
        self.selected = MenuItem::ALL[i];
    }

    /// Nudge the selected value up (`+1`) or down (`-1`)
    pub fn adjust(&mut self, direction: i32) {
        let up = direction > 0;
        match self.selected {
            MenuItem::PillarN => self.n = step_side(self.n, up),
            MenuItem::PillarM => self.m = step_side(self.m, up),
            MenuItem::Seed => {
                self.commit_seed_input();
                self.seed = if up { self.seed.saturating_add(1) } else { self.seed.saturating_sub(1).max(1) };
            }
            MenuItem::GenerationSpeed => {
                let delta = if up { INTERVAL_STEP } else { -INTERVAL_STEP };
                self.interval = (self.interval + delta).clamp(MIN_INTERVAL, MAX_INTERVAL);
            }
        }
    }

    /// Append a typed character to the seed field; non-digits are ignored
    pub fn type_char(&mut self, c: char) {
        if self.selected == MenuItem::Seed && c.is_ascii_digit() && self.seed_input.len() < 20 {
            self.seed_input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.seed_input.pop();
    }

    /// Seed text currently shown: typed digits if any, else the stored seed
    pub fn seed_text(&self) -> String {
        if self.seed_input.is_empty() {
            self.seed.to_string()
        } else {
            self.seed_input.clone()
        }
    }

    fn commit_seed_input(&mut self) {
        if !self.seed_input.is_empty() {
            self.seed = parse_seed(&self.seed_input);
            self.seed_input.clear();
        }
    }

    /// Finalize pending edits against the running configuration.
    /// Returns the requests needed to bring the simulation in line.
    pub fn confirm(&mut self, current: &LatticeConfig, current_interval: f32) -> Vec<MenuRequest> {
        self.commit_seed_input();
        let mut requests = Vec::new();

        let wanted = LatticeConfig {
            n: self.n,
            m: self.m,
            seed: self.seed,
            ..*current
        };
        if wanted != *current {
            requests.push(MenuRequest::Rebuild(wanted));
        }
        if (self.interval - current_interval).abs() > f32::EPSILON {
            requests.push(MenuRequest::SetInterval(self.interval));
        }
        requests
    }

    /// Sync pending values back to what is actually running
    pub fn sync(&mut self, config: &LatticeConfig, interval: f32) {
        self.n = config.n;
        self.m = config.m;
        self.seed = config.seed;
        self.interval = interval;
        self.seed_input.clear();
    }

    /// Draw the menu rows below `top`
    pub fn draw(&self, x: f32, top: f32) {
        if !self.visible {
            return;
        }
        let row = 30.0;
        let highlight = Color::new(0.2, 1.0, 0.2, 1.0);

        draw_text("Settings (Tab to close, Enter to apply)", x, top, 24.0, WHITE);
        let rows = [
            (MenuItem::PillarN, format!("Pillar Size - N: {}", self.n)),
            (MenuItem::PillarM, format!("Pillar Size - M: {}", self.m)),
            (MenuItem::Seed, format!("Seed: {}", self.seed_text())),
            (MenuItem::GenerationSpeed, format!("Generation Speed: {:.2} sec", self.interval)),
        ];
        for (i, (item, label)) in rows.iter().enumerate() {
            let y = top + row * (i as f32 + 1.0);
            if *item == self.selected {
                draw_text(label, x, y, 28.0, highlight);
            } else {
                draw_text(label, x, y, 24.0, WHITE);
            }
        }
    }
}

fn step_side(value: usize, up: bool) -> usize {
    if up {
        (value + 1).min(MAX_SIDE)
    } else {
        value.saturating_sub(1).max(1)
    }
}
