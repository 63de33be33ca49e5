// crates/platformer_game/src/components.rs

use engine_physics::{Body, Patrol};
use engine_shared::{Palette, Rect};

use crate::tunables::{INVINCIBLE_TICKS, PLAYER_LIVES, PLAYER_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Coin,
    Enemy,
    Platform,
    /// Solid like a platform, but only the floor clamp ever supports the player on it.
    Ground,
    FinishFlag,
}

/// Kind tag carried by every entity in the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CKind(pub EntityKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CRect(pub Rect);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CPalette(pub Palette);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CPlayer {
    pub body: Body,
    pub speed: i32,
    pub score: u32,
    pub lives: u32,
    pub invincible: bool,
    pub invincible_timer: i32,
}

impl Default for CPlayer {
    fn default() -> Self {
        Self {
            body: Body::default(),
            speed: PLAYER_SPEED,
            score: 0,
            lives: PLAYER_LIVES,
            invincible: false,
            invincible_timer: 0,
        }
    }
}

impl CPlayer {
    /// Lose a life unless still flashing from the last hit. Returns true when
    /// that was the last one.
    pub fn take_damage(&mut self) -> bool {
        if self.invincible {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invincible = true;
        self.invincible_timer = INVINCIBLE_TICKS;
        self.lives == 0
    }

    pub fn tick_invincibility(&mut self) {
        if self.invincible {
            self.invincible_timer -= 1;
            if self.invincible_timer <= 0 {
                self.invincible = false;
            }
        }
    }

    /// Blink phase while invincible.
    pub fn veiled(&self) -> bool {
        self.invincible && self.invincible_timer % 10 < 5
    }

    pub fn coins_collected(&self) -> u32 {
        self.score / crate::tunables::COIN_VALUE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CCoin {
    /// Spawn y; the bob offset is added to this every tick.
    pub baseline_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CEnemy {
    pub patrol: Patrol,
    /// The platform it walks on; `bottom` is pinned to its top.
    pub anchor: Rect,
}
