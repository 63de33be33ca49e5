// crates/platformer_game/src/level.rs
//! The two hand-built levels.

use engine_shared::{Palette, Rect, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelId {
    #[default]
    One,
    Two,
}

impl LevelId {
    pub fn number(self) -> u32 {
        match self {
            LevelId::One => 1,
            LevelId::Two => 2,
        }
    }

    pub fn data(self) -> &'static LevelData {
        match self {
            LevelId::One => &LEVEL_1,
            LevelId::Two => &LEVEL_2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySpawn {
    /// Index into `LevelData::platforms`.
    pub platform: usize,
    pub base_speed: i32,
    /// Explicit `(left, right)` patrol bounds instead of the inset platform edges.
    pub bounds: Option<(i32, i32)>,
}

#[derive(Debug)]
pub struct LevelData {
    pub id: LevelId,
    pub name: &'static str,
    pub theme: Theme,
    /// Player centre at spawn.
    pub spawn: (i32, i32),
    pub ground: Palette,
    pub platform_palette: Palette,
    pub platforms: &'static [Rect],
    /// Coin centres.
    pub coins: &'static [(i32, i32)],
    pub enemies: &'static [EnemySpawn],
    pub enemy_color: Rgb,
    /// `(centerx, bottom)` of the finish flag.
    pub flag: (i32, i32),
    pub flag_color: Rgb,
}

impl LevelData {
    pub fn total_coins(&self) -> usize {
        self.coins.len()
    }

    pub fn clear_color(&self) -> Rgb {
        match self.theme {
            Theme::Day => Rgb::LIGHT_BLUE,
            Theme::Night => NIGHT_SKY,
        }
    }
}

pub const NIGHT_SKY: Rgb = Rgb::new(40, 40, 100);

const fn enemy(platform: usize, base_speed: i32) -> EnemySpawn {
    EnemySpawn { platform, base_speed, bounds: None }
}

pub static LEVEL_1: LevelData = LevelData {
    id: LevelId::One,
    name: "Day world",
    theme: Theme::Day,
    spawn: (100, 500),
    ground: Palette::new(Rgb::BROWN, Rgb::GREEN),
    platform_palette: Palette::new(Rgb::GRAY, Rgb::BROWN),
    platforms: &[
        Rect::new(100, 450, 200, 20),
        Rect::new(400, 400, 150, 20),
        Rect::new(200, 300, 100, 20),
        Rect::new(600, 450, 150, 20),
        Rect::new(500, 250, 100, 20),
    ],
    coins: &[
        (150, 420),
        (250, 420),
        (350, 370),
        (450, 370),
        (550, 420),
        (650, 420),
        (700, 420),
        (100, 520),
        (300, 520),
        (400, 420),
        (650, 370),
        (250, 270),
    ],
    enemies: &[enemy(0, 2), enemy(1, 3), enemy(3, 2)],
    enemy_color: Rgb::RED,
    flag: (550, 250),
    flag_color: Rgb::PURPLE,
};

pub static LEVEL_2: LevelData = LevelData {
    id: LevelId::Two,
    name: "Night adventure",
    theme: Theme::Night,
    spawn: (50, 500),
    ground: Palette::new(Rgb::DARK_RED, Rgb::DARK_GREEN),
    platform_palette: Palette::new(Rgb::DARK_BLUE, Rgb::BLUE),
    platforms: &[
        Rect::new(100, 480, 200, 20),
        Rect::new(500, 450, 200, 20),
        Rect::new(200, 350, 150, 20),
        Rect::new(450, 250, 180, 20),
    ],
    coins: &[
        (150, 450),
        (250, 450),
        (550, 420),
        (650, 420),
        (250, 320),
        (300, 320),
        (350, 520),
        (750, 520),
        (400, 400),
        (300, 200),
    ],
    enemies: &[enemy(0, 2), enemy(1, 3), enemy(2, 2)],
    enemy_color: Rgb::ORANGE,
    flag: (530, 250),
    flag_color: Rgb::GOLD,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tunables::{FLOOR_Y, WIDTH};

    #[test]
    fn coin_totals() {
        assert_eq!(LEVEL_1.total_coins(), 12);
        assert_eq!(LEVEL_2.total_coins(), 10);
    }

    #[test]
    fn enemies_reference_real_platforms() {
        for data in [&LEVEL_1, &LEVEL_2] {
            for spawn in data.enemies {
                assert!(spawn.platform < data.platforms.len(), "{}", data.name);
            }
        }
    }

    #[test]
    fn everything_fits_the_field() {
        for data in [&LEVEL_1, &LEVEL_2] {
            for p in data.platforms {
                assert!(p.left() >= 0 && p.right() <= WIDTH);
                assert!(p.bottom() <= FLOOR_Y);
            }
            for &(x, y) in data.coins {
                assert!((0..=WIDTH).contains(&x) && y < FLOOR_Y);
            }
        }
    }

    #[test]
    fn ids_round_trip() {
        assert_eq!(LevelId::One.data().id, LevelId::One);
        assert_eq!(LevelId::Two.data().id, LevelId::Two);
        assert_eq!(LevelId::Two.number(), 2);
    }
}
