use crate::simulate::Simulator;

use super::{AppState, Scene, SeedMode};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    BatchSize,
    AutoIntervalMs,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::BatchSize, MenuItem::AutoIntervalMs, MenuItem::Seed];

const MAX_BATCH: u64 = 1_000_000;
const MIN_INTERVAL_MS: u64 = 50;
const INTERVAL_STEP_MS: u64 = 50;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::BatchSize => format!("Batch Size: {}", app.cfg_batch_size),
            MenuItem::AutoIntervalMs => format!("Auto-deal Interval (ms): {}", app.cfg_auto_interval_ms),
            MenuItem::Seed => format!("Seed: {}", app.cfg_seed_mode),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::BatchSize => {
                app.cfg_batch_size = app.cfg_batch_size.saturating_mul(10).min(MAX_BATCH);
            }
            MenuItem::AutoIntervalMs => {
                app.cfg_auto_interval_ms = app.cfg_auto_interval_ms.saturating_add(INTERVAL_STEP_MS);
            }
            MenuItem::Seed => {
                app.cfg_seed_mode = match app.cfg_seed_mode {
                    SeedMode::Random => SeedMode::Fixed(0),
                    SeedMode::Fixed(seed) => SeedMode::Fixed(seed.saturating_add(1)),
                };
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::BatchSize => {
                app.cfg_batch_size = (app.cfg_batch_size / 10).max(1);
            }
            MenuItem::AutoIntervalMs => {
                app.cfg_auto_interval_ms =
                    app.cfg_auto_interval_ms.saturating_sub(INTERVAL_STEP_MS).max(MIN_INTERVAL_MS);
            }
            MenuItem::Seed => {
                app.cfg_seed_mode = match app.cfg_seed_mode {
                    SeedMode::Random | SeedMode::Fixed(0) => SeedMode::Random,
                    SeedMode::Fixed(seed) => SeedMode::Fixed(seed - 1),
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.stop_auto();
        self.menu_index = 0;
        self.cfg_batch_size = self.batch_size;
        self.cfg_auto_interval_ms = self.auto_interval_ms;
        self.cfg_seed_mode = self.seed_mode;
        self.scene = Scene::Menu;
    }

    /// Apply the edited settings. A new simulator is built, so statistics restart.
    pub fn apply_menu(&mut self) {
        self.batch_size = self.cfg_batch_size.clamp(1, MAX_BATCH);
        self.auto_interval_ms = self.cfg_auto_interval_ms.max(MIN_INTERVAL_MS);
        self.seed_mode = self.cfg_seed_mode;
        self.sim = Simulator::new(self.seed_mode.seed());
        self.stop_auto();
        log::debug!(
            "settings applied: batch {} interval {}ms seed {}",
            self.batch_size,
            self.auto_interval_ms,
            self.seed_mode
        );
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
