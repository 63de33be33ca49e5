// crates/engine_shared/src/game_api.rs

use crate::draw::DrawList;
use crate::input_types::{Flow, TickInput};

/// The seam between the engine host and a game.
///
/// The host owns the window, the clock and the GPU; the game owns every piece
/// of simulation state and is driven exclusively through these calls, one
/// `update` per tick, one `draw` per rendered frame.
pub trait GameLogic {
    /// Logical size of the play field in game units; the renderer scales it to the window.
    fn field_size(&self) -> (u32, u32);

    fn on_load(&mut self) {}

    /// Advance exactly one tick.
    fn update(&mut self, input: &TickInput) -> Flow;

    /// Describe the current frame. Must not mutate simulation state.
    fn draw(&self, elapsed_ms: u64, out: &mut DrawList);

    /// Label/value rows for the debug inspector.
    fn inspect(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn on_unload(&mut self) {}
}
