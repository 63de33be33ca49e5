// crates/engine_ecs/src/lib.rs
//! Generational-arena entity store.
//!
//! One `World` owns every entity of a running level. Components live in one
//! `SparseSet` per type, so "all enemies" or "all coins" is just a query over
//! the matching storage rather than a second collection to keep in sync.

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::{SparseSet, Storage};
pub use world::World;
