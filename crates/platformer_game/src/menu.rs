// crates/platformer_game/src/menu.rs

use engine_shared::{Intent, Rect, TickInput};

use crate::level::LevelId;

pub const LEVEL_1_BUTTON: Rect = Rect::new(250, 280, 300, 60);
pub const LEVEL_2_BUTTON: Rect = Rect::new(250, 360, 300, 60);

/// Which level button, if any, covers the point. Edges count as inside.
pub fn hit_test(x: f32, y: f32) -> Option<LevelId> {
    if LEVEL_1_BUTTON.contains_point(x, y) {
        Some(LevelId::One)
    } else if LEVEL_2_BUTTON.contains_point(x, y) {
        Some(LevelId::Two)
    } else {
        None
    }
}

/// Level picked this tick: keyboard selection first, then clicks in arrival order.
pub fn selection(input: &TickInput) -> Option<LevelId> {
    if input.intents.was_pressed(Intent::SelectLevel1) {
        return Some(LevelId::One);
    }
    if input.intents.was_pressed(Intent::SelectLevel2) {
        return Some(LevelId::Two);
    }
    input.clicks.iter().find_map(|c| hit_test(c.x, c.y))
}
