// crates/platformer_game/src/systems/player.rs

use engine_ecs::{Entity, World};
use engine_physics::{apply_gravity, clamp_horizontal, clamp_to_floor};
use engine_shared::{Intent, IntentSet};
use tracing::trace;

use crate::components::{CPlayer, CRect};
use crate::tunables::{FLOOR_Y, GRAVITY, JUMP_IMPULSE, WIDTH};

/// Jump on the rising edge, then walk for every held direction.
pub fn apply_intents(world: &mut World, player: Entity, intents: &IntentSet) {
    let Some(state) = world.get_component_mut::<CPlayer>(player) else {
        return;
    };

    if intents.was_pressed(Intent::Jump) && state.body.jump(JUMP_IMPULSE) {
        trace!("jump");
    }

    let mut dx = 0;
    if intents.is_held(Intent::MoveLeft) {
        dx -= state.speed;
    }
    if intents.is_held(Intent::MoveRight) {
        dx += state.speed;
    }
    if dx != 0 {
        if let Some(rect) = world.get_component_mut::<CRect>(player) {
            rect.0.x += dx;
        }
    }
}

/// Gravity, floor and wall clamps, invincibility countdown.
pub fn update_player(world: &mut World, player: Entity) {
    let Some(mut rect) = world.get_component::<CRect>(player).map(|r| r.0) else {
        return;
    };
    let Some(state) = world.get_component_mut::<CPlayer>(player) else {
        return;
    };

    apply_gravity(&mut rect, &mut state.body, GRAVITY);
    clamp_to_floor(&mut rect, &mut state.body, FLOOR_Y);
    clamp_horizontal(&mut rect, 0, WIDTH);
    state.tick_invincibility();

    if let Some(slot) = world.get_component_mut::<CRect>(player) {
        slot.0 = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::spawn_player;

    fn rect(world: &World, e: Entity) -> engine_shared::Rect {
        world.get_component::<CRect>(e).unwrap().0
    }

    #[test]
    fn held_keys_move_four_units() {
        let mut world = World::new();
        let p = spawn_player(&mut world, (400, 525));
        let x0 = rect(&world, p).x;

        apply_intents(&mut world, p, &IntentSet::new().with_held(Intent::MoveRight));
        assert_eq!(rect(&world, p).x, x0 + 4);

        let both = IntentSet::new().with_held(Intent::MoveLeft).with_held(Intent::MoveRight);
        apply_intents(&mut world, p, &both);
        assert_eq!(rect(&world, p).x, x0 + 4);
    }

    #[test]
    fn jump_edge_sets_impulse() {
        let mut world = World::new();
        let p = spawn_player(&mut world, (400, 525));
        apply_intents(&mut world, p, &IntentSet::new().with_pressed(Intent::Jump));
        let body = world.get_component::<CPlayer>(p).unwrap().body;
        assert_eq!(body.velocity_y, JUMP_IMPULSE);
        assert!(body.jumping);

        // Held without a fresh press does nothing.
        let mut world = World::new();
        let p = spawn_player(&mut world, (400, 525));
        apply_intents(&mut world, p, &IntentSet::new().with_held(Intent::Jump));
        assert!(!world.get_component::<CPlayer>(p).unwrap().body.jumping);
    }

    #[test]
    fn standing_on_floor_stays_put() {
        let mut world = World::new();
        let p = spawn_player(&mut world, (400, 525));
        for _ in 0..10 {
            update_player(&mut world, p);
        }
        assert_eq!(rect(&world, p).bottom(), FLOOR_Y);
        assert_eq!(world.get_component::<CPlayer>(p).unwrap().body.velocity_y, 0.0);
    }

    #[test]
    fn walls_hold() {
        let mut world = World::new();
        let p = spawn_player(&mut world, (10, 525));
        let left = IntentSet::new().with_held(Intent::MoveLeft);
        for _ in 0..5 {
            apply_intents(&mut world, p, &left);
            update_player(&mut world, p);
        }
        assert_eq!(rect(&world, p).left(), 0);

        let right = IntentSet::new().with_held(Intent::MoveRight);
        for _ in 0..300 {
            apply_intents(&mut world, p, &right);
            update_player(&mut world, p);
        }
        assert_eq!(rect(&world, p).right(), WIDTH);
    }
}
