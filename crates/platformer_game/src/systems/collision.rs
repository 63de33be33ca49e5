// crates/platformer_game/src/systems/collision.rs
//! Player against everything else. Each check reads the player rect fresh,
//! so earlier resolutions in the same tick are seen by later ones.

use engine_ecs::{Entity, World};
use engine_shared::Rect;
use tracing::debug;

use crate::components::{CKind, CPlayer, CRect, EntityKind};
use crate::tunables::{COIN_VALUE, FLOOR_Y};

fn rect_of(world: &World, entity: Entity) -> Option<Rect> {
    world.get_component::<CRect>(entity).map(|r| r.0)
}

/// Entities of `kind` whose rect overlaps `area`, in storage order.
fn overlapping(world: &World, kind: EntityKind, area: &Rect) -> Vec<(Entity, Rect)> {
    let Some(kinds) = world.query::<CKind>() else {
        return Vec::new();
    };
    kinds
        .iter()
        .filter(|(_, k)| k.0 == kind)
        .filter_map(|(e, _)| rect_of(world, *e).map(|r| (*e, r)))
        .filter(|(_, r)| r.intersects(area))
        .collect()
}

/// Land on or bump into elevated platforms. Ground is left to the floor clamp.
/// Returns whether the player is standing on a platform.
pub fn resolve_platforms(world: &mut World, player: Entity) -> bool {
    let Some(mut rect) = rect_of(world, player) else {
        return false;
    };
    let platforms: Vec<Rect> =
        overlapping(world, EntityKind::Platform, &rect).into_iter().map(|(_, r)| r).collect();

    let Some(state) = world.get_component_mut::<CPlayer>(player) else {
        return false;
    };
    let on_ground =
        engine_physics::resolve_platforms(&mut rect, &mut state.body, platforms.iter(), FLOOR_Y);

    if let Some(slot) = world.get_component_mut::<CRect>(player) {
        slot.0 = rect;
    }
    on_ground
}

/// Pick up every touched coin. Returns how many were taken.
pub fn collect_coins(world: &mut World, player: Entity) -> u32 {
    let Some(rect) = rect_of(world, player) else {
        return 0;
    };

    let mut taken = 0;
    for (coin, _) in overlapping(world, EntityKind::Coin, &rect) {
        if world.despawn(coin) {
            taken += 1;
        }
    }

    if taken > 0 {
        if let Some(state) = world.get_component_mut::<CPlayer>(player) {
            state.score += taken * COIN_VALUE;
            debug!(taken, score = state.score, "coins collected");
        }
    }
    taken
}

/// One hit per tick no matter how many enemies overlap. Returns true if it was fatal.
pub fn enemy_contact(world: &mut World, player: Entity) -> bool {
    let Some(rect) = rect_of(world, player) else {
        return false;
    };
    if overlapping(world, EntityKind::Enemy, &rect).is_empty() {
        return false;
    }

    let Some(state) = world.get_component_mut::<CPlayer>(player) else {
        return false;
    };
    let was_invincible = state.invincible;
    let dead = state.take_damage();
    if !was_invincible {
        debug!(lives = state.lives, "player hit");
    }
    dead
}

pub fn reached_goal(world: &World, player: Entity) -> bool {
    let Some(rect) = rect_of(world, player) else {
        return false;
    };
    !overlapping(world, EntityKind::FinishFlag, &rect).is_empty()
}
