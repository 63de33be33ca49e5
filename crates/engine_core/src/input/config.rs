// crates/engine_core/src/input/config.rs

use crate::input::{EngineAction, InputMap};
use engine_shared::Intent;
use winit::keyboard::KeyCode;

/// Centralized default key bindings, so App::new stays small.
pub struct InputDefaults;

impl InputDefaults {
    pub fn setup(input_map: &mut InputMap) {
        // Movement: arrows plus A/D
        input_map.bind(KeyCode::ArrowLeft, Intent::MoveLeft);
        input_map.bind(KeyCode::KeyA, Intent::MoveLeft);
        input_map.bind(KeyCode::ArrowRight, Intent::MoveRight);
        input_map.bind(KeyCode::KeyD, Intent::MoveRight);

        input_map.bind(KeyCode::ArrowUp, Intent::Jump);
        input_map.bind(KeyCode::KeyW, Intent::Jump);
        input_map.bind(KeyCode::Space, Intent::Jump);

        // Session
        input_map.bind(KeyCode::KeyR, Intent::Restart);
        input_map.bind(KeyCode::Escape, Intent::ReturnToMenu);
        input_map.bind(KeyCode::Digit1, Intent::SelectLevel1);
        input_map.bind(KeyCode::Numpad1, Intent::SelectLevel1);
        input_map.bind(KeyCode::Digit2, Intent::SelectLevel2);
        input_map.bind(KeyCode::Numpad2, Intent::SelectLevel2);

        input_map.bind_engine(KeyCode::F1, EngineAction::ToggleInspector);
    }

    pub fn map() -> InputMap {
        let mut map = InputMap::new();
        Self::setup(&mut map);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Binding;

    const BOUND: [KeyCode; 13] = [
        KeyCode::ArrowLeft,
        KeyCode::KeyA,
        KeyCode::ArrowRight,
        KeyCode::KeyD,
        KeyCode::ArrowUp,
        KeyCode::KeyW,
        KeyCode::Space,
        KeyCode::KeyR,
        KeyCode::Escape,
        KeyCode::Digit1,
        KeyCode::Numpad1,
        KeyCode::Digit2,
        KeyCode::Numpad2,
    ];

    #[test]
    fn every_player_intent_is_reachable() {
        let map = InputDefaults::map();
        for intent in Intent::ALL {
            if intent == Intent::Quit {
                // Closing the window is the only way out.
                continue;
            }
            let reachable = BOUND.iter().any(|&k| map.intent_for(k) == Some(intent));
            assert!(reachable, "{intent:?} has no key");
        }
    }

    #[test]
    fn jump_has_three_keys() {
        let map = InputDefaults::map();
        for key in [KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space] {
            assert_eq!(map.intent_for(key), Some(Intent::Jump));
        }
        let jumps = BOUND.iter().filter(|&&k| map.intent_for(k) == Some(Intent::Jump));
        assert_eq!(jumps.count(), 3);
    }

    #[test]
    fn f1_toggles_the_inspector() {
        let map = InputDefaults::map();
        assert_eq!(
            map.lookup(KeyCode::F1),
            Some(Binding::Engine(EngineAction::ToggleInspector))
        );
    }
}
