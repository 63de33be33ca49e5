// crates/platformer_game/src/systems/coin.rs

use engine_ecs::{Entity, World};
use engine_physics::bob_offset;

use crate::components::{CCoin, CRect};
use crate::tunables::{COIN_BOB_AMPLITUDE, COIN_BOB_RATE};

pub fn update_coins(world: &mut World, elapsed_ms: u64) {
    let offset = bob_offset(elapsed_ms, COIN_BOB_RATE, COIN_BOB_AMPLITUDE);

    let coins: Vec<(Entity, i32)> = match world.query::<CCoin>() {
        Some(set) => set.iter().map(|(e, c)| (*e, c.baseline_y)).collect(),
        None => return,
    };

    if let Some(rects) = world.query_mut::<CRect>() {
        for (entity, baseline) in coins {
            if let Some(rect) = rects.get_mut(entity) {
                rect.0.set_top(baseline + offset);
            }
        }
    }
}
