// crates/engine_shared/src/lib.rs
//! Vocabulary shared by the host (window, renderer, input devices) and the game.
//!
//! Nothing in here knows about wgpu or winit: the game crate only ever sees
//! intents going in and a draw list coming out.

pub mod color;
pub mod draw;
pub mod game_api;
pub mod geometry;
pub mod input_types;

pub use color::{Palette, Rgb};
pub use draw::{DrawItem, DrawList, TextAnchor, TextItem, TextSize, VisualKind};
pub use game_api::GameLogic;
pub use geometry::Rect;
pub use input_types::{Flow, Intent, IntentSet, PointerClick, TickInput};
