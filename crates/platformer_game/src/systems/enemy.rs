// crates/platformer_game/src/systems/enemy.rs

use engine_ecs::{Entity, World};

use crate::components::{CEnemy, CRect};

/// Walk every enemy one step along its platform.
pub fn update_enemies(world: &mut World) {
    // Collect first: patrol state and rects live in separate storages.
    let mut walkers: Vec<(Entity, CEnemy)> = match world.query::<CEnemy>() {
        Some(set) => set.iter().map(|(e, c)| (*e, *c)).collect(),
        None => return,
    };

    if let Some(rects) = world.query_mut::<CRect>() {
        for (entity, enemy) in walkers.iter_mut() {
            if let Some(rect) = rects.get_mut(*entity) {
                enemy.patrol.step(&mut rect.0, enemy.anchor.top());
            }
        }
    }

    if let Some(enemies) = world.query_mut::<CEnemy>() {
        for (entity, enemy) in walkers {
            if let Some(slot) = enemies.get_mut(entity) {
                *slot = enemy;
            }
        }
    }
}
