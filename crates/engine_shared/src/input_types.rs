// crates/engine_shared/src/input_types.rs
//! Discrete player intents and the per-tick input snapshot handed to the game.

/// Everything the input layer can ask of the game.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft = 0,
    MoveRight = 1,
    Jump = 2,
    Restart = 3,
    ReturnToMenu = 4,
    SelectLevel1 = 5,
    SelectLevel2 = 6,
    Quit = 7,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::Jump,
        Intent::Restart,
        Intent::ReturnToMenu,
        Intent::SelectLevel1,
        Intent::SelectLevel2,
        Intent::Quit,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Resolved intents for one tick.
///
/// `held` is level-triggered (movement); `pressed` latches the rising edge of
/// a key since the previous tick, so a tap shorter than a tick still counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentSet {
    held: u16,
    pressed: u16,
}

impl IntentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rising edge: marks the intent both pressed and held.
    pub fn press(&mut self, intent: Intent) {
        self.pressed |= intent.bit();
        self.held |= intent.bit();
    }

    pub fn hold(&mut self, intent: Intent) {
        self.held |= intent.bit();
    }

    pub fn with_pressed(mut self, intent: Intent) -> Self {
        self.press(intent);
        self
    }

    pub fn with_held(mut self, intent: Intent) -> Self {
        self.hold(intent);
        self
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        self.held & intent.bit() != 0
    }

    pub fn was_pressed(&self, intent: Intent) -> bool {
        self.pressed & intent.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0 && self.pressed == 0
    }

    /// Compact form for trace logs: `held | pressed << 8`.
    pub fn bits(&self) -> u32 {
        self.held as u32 | (self.pressed as u32) << 8
    }
}

/// A pointer press, already converted to game-field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub x: f32,
    pub y: f32,
}

/// Everything the game needs to advance one tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub tick: u64,
    /// Milliseconds since the host started; drives time-based animation.
    pub elapsed_ms: u64,
    pub intents: IntentSet,
    pub clicks: Vec<PointerClick>,
}

impl TickInput {
    pub fn new(tick: u64, elapsed_ms: u64, intents: IntentSet) -> Self {
        Self { tick, elapsed_ms, intents, clicks: Vec::new() }
    }

    pub fn with_click(mut self, x: f32, y: f32) -> Self {
        self.clicks.push(PointerClick { x, y });
        self
    }
}

/// What the host loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_implies_held_but_hold_is_not_a_press() {
        let set = IntentSet::new()
            .with_pressed(Intent::Jump)
            .with_held(Intent::MoveLeft);

        assert!(set.was_pressed(Intent::Jump));
        assert!(set.is_held(Intent::Jump));
        assert!(set.is_held(Intent::MoveLeft));
        assert!(!set.was_pressed(Intent::MoveLeft));
        assert!(!set.is_held(Intent::MoveRight));
    }

    #[test]
    fn every_intent_has_its_own_bit() {
        let mut seen = 0u16;
        for intent in Intent::ALL {
            assert_eq!(seen & intent.bit(), 0);
            seen |= intent.bit();
        }
        assert_eq!(seen.count_ones() as usize, Intent::ALL.len());
    }
}
