// crates/engine_core/src/input/map.rs
use std::collections::HashMap;

use engine_shared::Intent;
use winit::keyboard::KeyCode;

/// Host-side commands that never reach the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    ToggleInspector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Game(Intent),
    Engine(EngineAction),
}

#[derive(Default)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, Binding>,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: KeyCode, intent: Intent) {
        self.key_bindings.insert(key, Binding::Game(intent));
    }

    pub fn bind_engine(&mut self, key: KeyCode, action: EngineAction) {
        self.key_bindings.insert(key, Binding::Engine(action));
    }

    pub fn lookup(&self, key: KeyCode) -> Option<Binding> {
        self.key_bindings.get(&key).copied()
    }

    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        match self.lookup(key)? {
            Binding::Game(intent) => Some(intent),
            Binding::Engine(_) => None,
        }
    }
}
