// crates/engine_core/src/app.rs

use engine_shared::GameLogic;
use tracing::info;

use crate::error::HostError;
use crate::gui::GuiSystem;
use crate::input::{InputDefaults, InputMap};
use crate::platform_runner::PlatformRunner;

/// Host settings, normally filled from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Initial window size as a multiple of the game field.
    pub scale: f64,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Open the inspector window on start.
    pub inspector: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Platformer".to_string(),
            scale: 1.0,
            tick_rate: 60,
            inspector: false,
        }
    }
}

impl AppConfig {
    pub fn window_size(&self, field: (u32, u32)) -> (f64, f64) {
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        };
        (field.0 as f64 * scale, field.1 as f64 * scale)
    }
}

/// A game plus everything the host needs to drive it.
pub struct App<G: GameLogic> {
    pub(crate) config: AppConfig,
    pub(crate) game: G,
    pub(crate) input_map: InputMap,
    pub(crate) gui: GuiSystem,
}

impl<G: GameLogic> App<G> {
    pub fn new(config: AppConfig, game: G) -> Self {
        let input_map = InputDefaults::map();
        let gui = GuiSystem::new(config.inspector);

        Self {
            config,
            game,
            input_map,
            gui,
        }
    }

    /// Open the window and drive the game until it exits or the window closes.
    pub fn run(self) -> Result<(), HostError> {
        info!(title = %self.config.title, tick_rate = self.config.tick_rate, "starting host");
        PlatformRunner::new(self).start()
    }
}
