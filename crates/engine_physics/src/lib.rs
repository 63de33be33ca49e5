// crates/engine_physics/src/lib.rs
//! Integer-grid kinematics for 2D side-scrollers.
//!
//! Positions are whole units (`Rect`), velocities are floats; each tick the
//! velocity is integrated and the displacement floored onto the grid.

pub mod contact;
pub mod kinematics;
pub mod motion;

pub use contact::{resolve_platform, resolve_platforms, Contact};
pub use kinematics::{apply_gravity, clamp_horizontal, clamp_to_floor, Body};
pub use motion::{bob_offset, Patrol};
