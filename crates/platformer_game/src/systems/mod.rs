// crates/platformer_game/src/systems/mod.rs
//! Per-kind update systems, run by `Game::tick` in a fixed order.

pub mod coin;
pub mod collision;
pub mod enemy;
pub mod player;
