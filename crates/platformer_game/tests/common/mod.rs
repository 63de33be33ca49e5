// Shared helpers for driving `Game` tick by tick.
#![allow(dead_code)]

use engine_ecs::Entity;
use engine_shared::{GameLogic, Intent, IntentSet, Rect, TickInput};
use platformer_game::components::{CEnemy, CKind, CPlayer, CRect, EntityKind};
use platformer_game::Game;

pub struct Driver {
    pub game: Game,
    pub tick: u64,
    /// Fixed clock keeps the coin bob at zero.
    pub elapsed_ms: u64,
}

impl Driver {
    pub fn new() -> Self {
        Self { game: Game::new(), tick: 0, elapsed_ms: 0 }
    }

    pub fn started(level: Intent) -> Self {
        let mut driver = Self::new();
        driver.press(level);
        driver
    }

    pub fn step(&mut self, intents: IntentSet) {
        self.tick += 1;
        let input = TickInput::new(self.tick, self.elapsed_ms, intents);
        self.game.update(&input);
    }

    pub fn idle(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step(IntentSet::new());
        }
    }

    pub fn press(&mut self, intent: Intent) {
        self.step(IntentSet::new().with_pressed(intent));
    }

    pub fn player(&self) -> CPlayer {
        *self.game.player().expect("player spawned")
    }

    pub fn player_rect(&self) -> Rect {
        self.game.player_rect().expect("player spawned")
    }

    pub fn player_mut(&mut self) -> &mut CPlayer {
        let e = self.game.player_entity().expect("player spawned");
        self.game.world_mut().get_component_mut::<CPlayer>(e).expect("player state")
    }

    /// Teleport the player and stop its vertical motion.
    pub fn place_player(&mut self, rect: Rect) {
        let e = self.game.player_entity().expect("player spawned");
        self.game.world_mut().get_component_mut::<CRect>(e).expect("player rect").0 = rect;
        self.player_mut().body.velocity_y = 0.0;
    }

    pub fn entities_of(&self, kind: EntityKind) -> Vec<(Entity, Rect)> {
        let world = self.game.world();
        let Some(kinds) = world.query::<CKind>() else {
            return Vec::new();
        };
        kinds
            .iter()
            .filter(|(_, k)| k.0 == kind)
            .filter_map(|(e, _)| world.get_component::<CRect>(*e).map(|r| (*e, r.0)))
            .collect()
    }

    pub fn enemies(&self) -> Vec<(CEnemy, Rect)> {
        let world = self.game.world();
        self.entities_of(EntityKind::Enemy)
            .into_iter()
            .filter_map(|(e, r)| world.get_component::<CEnemy>(e).map(|c| (*c, r)))
            .collect()
    }

    pub fn despawn_all(&mut self, kind: EntityKind) {
        for (e, _) in self.entities_of(kind) {
            self.game.world_mut().despawn(e);
        }
    }

    /// Every non-player entity as `(kind, rect)`, sorted, for comparing layouts.
    pub fn layout(&self) -> Vec<(u8, i32, i32, i32, i32)> {
        let kinds = [
            EntityKind::Ground,
            EntityKind::Platform,
            EntityKind::Coin,
            EntityKind::Enemy,
            EntityKind::FinishFlag,
        ];
        let mut out: Vec<_> = kinds
            .iter()
            .enumerate()
            .flat_map(|(i, k)| {
                self.entities_of(*k).into_iter().map(move |(_, r)| (i as u8, r.x, r.y, r.w, r.h))
            })
            .collect();
        out.sort();
        out
    }
}

/// Tiny deterministic xorshift for scripted fuzzing.
pub struct Script(u64);

impl Script {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Random held movement plus the occasional jump press.
    pub fn intents(&mut self) -> IntentSet {
        let roll = self.next();
        let mut set = IntentSet::new();
        match roll % 4 {
            0 => set.hold(Intent::MoveLeft),
            1 | 2 => set.hold(Intent::MoveRight),
            _ => {}
        }
        if (roll >> 8) % 6 == 0 {
            set.press(Intent::Jump);
        }
        set
    }
}
