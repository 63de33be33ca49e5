// crates/platformer_game/src/lib.rs
//! Two-level side-scrolling platformer.
//!
//! `Game` owns the whole simulation and is driven by the host through
//! [`engine_shared::GameLogic`]; nothing in this crate touches a window or GPU.

pub mod components;
pub mod level;
pub mod menu;
pub mod present;
pub mod rating;
pub mod scene;
pub mod session;
pub mod state;
pub mod systems;
pub mod tunables;

pub use level::LevelId;
pub use session::Phase;
pub use state::Game;
