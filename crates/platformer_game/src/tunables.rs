//! Gameplay constants. Levels are fixed layouts, so none of this is runtime-tunable.

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 600;
/// Everything rests on this line unless an elevated platform holds it up.
pub const FLOOR_Y: i32 = HEIGHT - 50;
/// Default simulation rate; every per-tick speed in this module assumes it.
pub const TICK_RATE: u32 = 60;

pub const PLAYER_SIZE: (i32, i32) = (35, 50);
pub const PLAYER_SPEED: i32 = 4;
pub const PLAYER_LIVES: u32 = 2;
pub const GRAVITY: f32 = 0.5;
pub const JUMP_IMPULSE: f32 = -12.0;
pub const INVINCIBLE_TICKS: i32 = 60;

pub const COIN_SIZE: i32 = 25;
pub const COIN_VALUE: u32 = 10;
pub const COIN_BOB_RATE: f64 = 0.005;
pub const COIN_BOB_AMPLITUDE: f64 = 3.0;

pub const ENEMY_SIZE: i32 = 40;
pub const ENEMY_SPEED_FACTOR: f32 = 0.7;
/// Patrol bounds sit this far inside the platform edges.
pub const ENEMY_BOUND_INSET: i32 = 20;

pub const FLAG_SIZE: (i32, i32) = (30, 50);

pub const CONTROLS_BAR_HEIGHT: i32 = 40;
