// crates/platformer_game/src/session.rs

use tracing::info;

use crate::level::LevelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

/// Phase machine for one run of the program.
///
/// Only the transitions below exist; every other request is a no-op that
/// returns `false`.
///
/// ```text
/// Menu --start--> Playing --lose--> GameOver --restart--> Playing
///                    |  \--win--> Victory ----restart--> Playing
///                    \-- any non-Menu --return_to_menu--> Menu
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    level: LevelId,
    phase: Phase,
    level_complete: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    /// Set on reaching a flag; survives the trip back to the menu and is
    /// cleared only when a level is built again.
    pub fn level_complete(&self) -> bool {
        self.level_complete
    }

    pub fn is_simulating(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Enter a freshly built level.
    pub fn start(&mut self, level: LevelId) {
        info!(level = level.number(), from = ?self.phase, "level start");
        self.level = level;
        self.phase = Phase::Playing;
        self.level_complete = false;
    }

    pub fn can_restart(&self) -> bool {
        matches!(self.phase, Phase::GameOver | Phase::Victory)
    }

    pub fn return_to_menu(&mut self) -> bool {
        if self.phase == Phase::Menu {
            return false;
        }
        info!(from = ?self.phase, level_complete = self.level_complete, "back to menu");
        self.phase = Phase::Menu;
        true
    }

    pub fn lose(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        info!(level = self.level.number(), "game over");
        self.phase = Phase::GameOver;
        true
    }

    pub fn win(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        info!(level = self.level.number(), "level complete");
        self.phase = Phase::Victory;
        self.level_complete = true;
        true
    }
}
