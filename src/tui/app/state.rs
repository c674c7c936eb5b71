use crate::simulate::Simulator;
use crate::stats::{ScoredShow, Stats};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    DealOne,
    DealBatch,
    ToggleAuto,
    ResetStats,
}

/// How the deck RNG is seeded when settings are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    #[default]
    Random,
    Fixed(u64),
}

impl SeedMode {
    pub fn seed(self) -> Option<u64> {
        match self {
            SeedMode::Random => None,
            SeedMode::Fixed(seed) => Some(seed),
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMode::Random => f.write_str("random"),
            SeedMode::Fixed(seed) => write!(f, "fixed {seed}"),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub sim: Simulator,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_batch_size: u64,
    pub cfg_auto_interval_ms: u64,
    pub cfg_seed_mode: SeedMode,
    // Applied settings
    pub batch_size: u64,
    pub auto_interval_ms: u64,
    pub seed_mode: SeedMode,
    auto_deal: bool,
    last_auto_deal: Option<Instant>,
    help_open: bool,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_seed(None)
    }
}

impl AppState {
    /// Start with the given seed already applied, so leaving the first menu
    /// without pressing Enter keeps it.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let batch_size = 1_000;
        let auto_interval_ms = 250;
        let seed_mode = seed.map_or(SeedMode::Random, SeedMode::Fixed);
        Self {
            scene: Scene::Menu,
            sim: Simulator::new(seed_mode.seed()),
            menu_index: 0,
            cfg_batch_size: batch_size,
            cfg_auto_interval_ms: auto_interval_ms,
            cfg_seed_mode: seed_mode,
            batch_size,
            auto_interval_ms,
            seed_mode,
            auto_deal: false,
            last_auto_deal: None,
            help_open: false,
            error: None,
        }
    }

    pub fn stats(&self) -> &Stats {
        self.sim.stats()
    }

    pub fn last_show(&self) -> Option<&ScoredShow> {
        self.sim.stats().last()
    }

    pub fn auto_deal(&self) -> bool {
        self.auto_deal
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn stop_auto(&mut self) {
        self.auto_deal = false;
        self.last_auto_deal = None;
    }

    /// Returns true when at least one hand was dealt.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::DealOne => self.scene == Scene::Table && self.deal(1),
            InputAction::DealBatch => self.scene == Scene::Table && self.deal(self.batch_size),
            InputAction::ToggleAuto => {
                if self.scene == Scene::Table {
                    if self.auto_deal {
                        self.stop_auto();
                    } else {
                        self.auto_deal = true;
                    }
                }
                false
            }
            InputAction::ResetStats => {
                if self.scene == Scene::Table {
                    self.sim.reset_stats();
                    self.error = None;
                }
                false
            }
        }
    }

    fn deal(&mut self, n: u64) -> bool {
        match self.sim.run(n) {
            Ok(_) => {
                self.error = None;
                n > 0
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.stop_auto();
                false
            }
        }
    }

    /// Called by the controller every tick; deals one hand when auto-deal is
    /// on and the interval has passed.
    pub fn on_tick(&mut self) {
        if self.scene != Scene::Table || self.help_open || !self.auto_deal {
            return;
        }
        let interval = Duration::from_millis(self.auto_interval_ms);
        let due = self.last_auto_deal.map_or(true, |at| at.elapsed() >= interval);
        if due {
            self.deal(1);
            self.last_auto_deal = Some(Instant::now());
        }
    }
}
