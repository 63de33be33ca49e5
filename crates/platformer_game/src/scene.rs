// crates/platformer_game/src/scene.rs

use engine_ecs::{Entity, World};
use engine_physics::Patrol;
use engine_shared::{Palette, Rect, Rgb};
use tracing::info;

use crate::components::{CCoin, CEnemy, CKind, CPalette, CPlayer, CRect, EntityKind};
use crate::level::LevelData;
use crate::tunables::{
    COIN_SIZE, ENEMY_BOUND_INSET, ENEMY_SIZE, ENEMY_SPEED_FACTOR, FLAG_SIZE, FLOOR_Y, HEIGHT,
    PLAYER_SIZE, WIDTH,
};

fn spawn_static(world: &mut World, kind: EntityKind, rect: Rect, palette: Palette) -> Entity {
    let e = world.spawn();
    world.add_component(e, CKind(kind));
    world.add_component(e, CRect(rect));
    world.add_component(e, CPalette(palette));
    e
}

pub fn spawn_player(world: &mut World, (cx, cy): (i32, i32)) -> Entity {
    let (w, h) = PLAYER_SIZE;
    let e = spawn_static(
        world,
        EntityKind::Player,
        Rect::from_center(cx, cy, w, h),
        Palette::new(Rgb::BLUE, Rgb::SKIN),
    );
    world.add_component(e, CPlayer::default());
    e
}

pub fn spawn_coin(world: &mut World, (cx, cy): (i32, i32)) -> Entity {
    let e = spawn_static(
        world,
        EntityKind::Coin,
        Rect::from_center(cx, cy, COIN_SIZE, COIN_SIZE),
        Palette::new(Rgb::YELLOW, Rgb::GOLD),
    );
    world.add_component(e, CCoin { baseline_y: cy });
    e
}

/// Stand a walker in the middle of `platform`, patrolling its inset edges
/// unless `bounds` overrides them.
pub fn spawn_enemy(
    world: &mut World,
    platform: Rect,
    base_speed: i32,
    bounds: Option<(i32, i32)>,
    color: Rgb,
) -> Entity {
    let mut rect = Rect::new(0, 0, ENEMY_SIZE, ENEMY_SIZE);
    rect.set_bottom(platform.top());
    rect.set_centerx(platform.centerx());

    let (left, right) = bounds.unwrap_or((
        platform.left() + ENEMY_BOUND_INSET,
        platform.right() - ENEMY_BOUND_INSET,
    ));
    let speed = Patrol::scaled_speed(base_speed, ENEMY_SPEED_FACTOR);

    let e = spawn_static(world, EntityKind::Enemy, rect, Palette::new(color, Rgb::WHITE));
    world.add_component(e, CEnemy { patrol: Patrol::new(left, right, speed), anchor: platform });
    e
}

pub fn spawn_flag(world: &mut World, (cx, bottom): (i32, i32), color: Rgb) -> Entity {
    let (w, h) = FLAG_SIZE;
    let mut rect = Rect::new(0, 0, w, h);
    rect.set_bottom(bottom);
    rect.set_centerx(cx);
    spawn_static(world, EntityKind::FinishFlag, rect, Palette::new(Rgb::BROWN, color))
}

/// Replace everything in `world` with a fresh copy of `data`. Returns the player.
pub fn build_level(world: &mut World, data: &LevelData) -> Entity {
    world.clear();

    spawn_static(
        world,
        EntityKind::Ground,
        Rect::new(0, FLOOR_Y, WIDTH, HEIGHT - FLOOR_Y),
        data.ground,
    );
    for &platform in data.platforms {
        spawn_static(world, EntityKind::Platform, platform, data.platform_palette);
    }
    for &pos in data.coins {
        spawn_coin(world, pos);
    }
    for spawn in data.enemies {
        let platform = data.platforms[spawn.platform];
        spawn_enemy(world, platform, spawn.base_speed, spawn.bounds, data.enemy_color);
    }
    spawn_flag(world, data.flag, data.flag_color);
    let player = spawn_player(world, data.spawn);

    info!(
        level = data.id.number(),
        entities = world.len(),
        coins = world.count::<CCoin>(),
        enemies = world.count::<CEnemy>(),
        "level built"
    );
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LEVEL_1, LEVEL_2};

    fn kinds(world: &World, kind: EntityKind) -> usize {
        world
            .query::<CKind>()
            .map(|set| set.iter().filter(|(_, k)| k.0 == kind).count())
            .unwrap_or(0)
    }

    #[test]
    fn level_one_population() {
        let mut world = World::new();
        let player = build_level(&mut world, &LEVEL_1);

        assert!(world.get_component::<CPlayer>(player).is_some());
        assert_eq!(kinds(&world, EntityKind::Ground), 1);
        assert_eq!(kinds(&world, EntityKind::Platform), 5);
        assert_eq!(kinds(&world, EntityKind::Coin), 12);
        assert_eq!(kinds(&world, EntityKind::Enemy), 3);
        assert_eq!(kinds(&world, EntityKind::FinishFlag), 1);
        assert_eq!(world.len(), 1 + 5 + 12 + 3 + 1 + 1);
    }

    #[test]
    fn player_spawns_centred() {
        let mut world = World::new();
        let player = build_level(&mut world, &LEVEL_2);
        let rect = world.get_component::<CRect>(player).unwrap().0;
        assert_eq!((rect.centerx(), rect.centery()), (50, 500));
        assert_eq!((rect.w, rect.h), PLAYER_SIZE);
    }

    #[test]
    fn enemy_rests_on_its_platform() {
        let mut world = World::new();
        let platform = Rect::new(400, 400, 150, 20);
        let e = spawn_enemy(&mut world, platform, 3, None, Rgb::RED);

        let rect = world.get_component::<CRect>(e).unwrap().0;
        assert_eq!(rect.bottom(), 400);
        assert_eq!(rect.centerx(), 475);

        let enemy = world.get_component::<CEnemy>(e).unwrap();
        assert_eq!(enemy.patrol.left_bound, 420);
        assert_eq!(enemy.patrol.right_bound, 530);
        assert_eq!(enemy.patrol.speed, 2);
        assert_eq!(enemy.patrol.direction, 1);
    }

    #[test]
    fn explicit_bounds_override_inset() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, Rect::new(0, 300, 400, 20), 2, Some((50, 250)), Rgb::RED);
        let patrol = world.get_component::<CEnemy>(e).unwrap().patrol;
        assert_eq!((patrol.left_bound, patrol.right_bound), (50, 250));
    }

    #[test]
    fn flag_stands_on_its_anchor() {
        let mut world = World::new();
        let e = spawn_flag(&mut world, (550, 250), Rgb::PURPLE);
        let rect = world.get_component::<CRect>(e).unwrap().0;
        assert_eq!(rect, Rect::new(535, 200, 30, 50));
    }

    #[test]
    fn rebuild_replaces_everything() {
        let mut world = World::new();
        let first = build_level(&mut world, &LEVEL_1);
        let second = build_level(&mut world, &LEVEL_1);
        assert!(!world.is_alive(first));
        assert!(world.is_alive(second));
        assert_eq!(world.count::<CCoin>(), 12);
    }
}
