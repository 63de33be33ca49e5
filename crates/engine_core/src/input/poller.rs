// crates/engine_core/src/input/poller.rs

use crate::input::{Binding, EngineAction, InputMap};
use engine_shared::{Intent, IntentSet, PointerClick};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Everything collected since the previous tick.
#[derive(Debug, Default)]
pub struct PolledInput {
    pub intents: IntentSet,
    pub clicks: Vec<PointerClick>,
    pub engine: Vec<EngineAction>,
}

/// Low-level input collector that tracks physical keys between ticks.
/// This keeps raw device state out of App / PlatformRunner.
///
/// Presses are latched until the next [`InputPoller::drain`], so a tap that
/// starts and ends between two ticks is still seen once.
#[derive(Default)]
pub struct InputPoller {
    active_keys: Vec<KeyCode>,
    pressed_keys: Vec<KeyCode>,
    /// Last cursor position in window pixels.
    cursor: Option<(f64, f64)>,
    raw_clicks: Vec<(f64, f64)>,
    quit_requested: bool,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single winit WindowEvent and update internal state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.pointer_pressed(),
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            match key_event.state {
                ElementState::Pressed => self.key_down(keycode),
                ElementState::Released => self.key_up(keycode),
            }
        }
    }

    /// OS key repeat arrives as repeated presses; only the first one latches.
    pub fn key_down(&mut self, key: KeyCode) {
        if !self.active_keys.contains(&key) {
            self.active_keys.push(key);
            self.pressed_keys.push(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.active_keys.retain(|&k| k != key);
    }

    /// Forget held keys; latched presses still count.
    pub fn release_all(&mut self) {
        self.active_keys.clear();
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn pointer_pressed(&mut self) {
        if let Some(pos) = self.cursor {
            self.raw_clicks.push(pos);
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Resolve everything gathered since the last call through `input_map`
    /// and reset the latches. `to_field` maps window pixels to game
    /// coordinates and rejects clicks outside the field.
    pub fn drain(
        &mut self,
        input_map: &InputMap,
        to_field: impl Fn(f64, f64) -> Option<(f32, f32)>,
    ) -> PolledInput {
        let mut out = PolledInput::default();

        for &key in &self.active_keys {
            if let Some(intent) = input_map.intent_for(key) {
                out.intents.hold(intent);
            }
        }
        for key in self.pressed_keys.drain(..) {
            match input_map.lookup(key) {
                Some(Binding::Game(intent)) => out.intents.press(intent),
                Some(Binding::Engine(action)) => out.engine.push(action),
                None => {}
            }
        }
        if std::mem::take(&mut self.quit_requested) {
            out.intents.press(Intent::Quit);
        }

        out.clicks = self
            .raw_clicks
            .drain(..)
            .filter_map(|(x, y)| to_field(x, y))
            .map(|(x, y)| PointerClick { x, y })
            .collect();
        out
    }
}
