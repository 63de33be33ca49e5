mod common;

use common::{Driver, Script};
use engine_shared::{GameLogic, Intent, IntentSet, TickInput};
use platformer_game::tunables::{COIN_VALUE, PLAYER_LIVES, WIDTH};
use platformer_game::{Game, Phase};

/// Drive a level with scripted input for `ticks`, restarting whenever a
/// round ends, and check the per-tick invariants throughout.
fn soak(level: Intent, seed: u64, ticks: usize) -> (usize, usize) {
    let mut d = Driver::started(level);
    let mut script = Script::new(seed);
    let total = d.game.level_data().total_coins();
    let mut last_lives = PLAYER_LIVES;
    let (mut losses, mut wins) = (0, 0);

    for t in 0..ticks {
        d.elapsed_ms = t as u64 * 16;
        match d.game.phase() {
            Phase::GameOver | Phase::Victory => {
                if d.game.phase() == Phase::GameOver {
                    losses += 1;
                } else {
                    wins += 1;
                }
                d.press(Intent::Restart);
                last_lives = PLAYER_LIVES;
                assert_eq!(d.player().lives, PLAYER_LIVES);
            }
            _ => d.step(script.intents()),
        }

        let player = d.player();
        let rect = d.player_rect();

        assert!(player.lives <= last_lives, "lives went up at tick {t}");
        assert!(player.lives <= PLAYER_LIVES);
        last_lives = player.lives;
        if player.lives == 0 {
            assert_eq!(d.game.phase(), Phase::GameOver, "dead but still {:?}", d.game.phase());
        }

        assert!(rect.left() >= 0 && rect.right() <= WIDTH, "{rect:?} left the field at tick {t}");

        let collected = total - d.game.coins_left();
        assert_eq!(player.score, collected as u32 * COIN_VALUE);

        for (enemy, rect) in d.enemies() {
            assert!(enemy.patrol.contains(&rect), "{rect:?} outside {:?}", enemy.patrol);
            assert_eq!(rect.bottom(), enemy.anchor.top());
        }
    }
    (losses, wins)
}

#[test]
fn level_one_soak() {
    for seed in [1, 7, 42] {
        soak(Intent::SelectLevel1, seed, 4_000);
    }
}

#[test]
fn level_two_soak() {
    for seed in [3, 99, 2024] {
        soak(Intent::SelectLevel2, seed, 4_000);
    }
}

#[test]
fn quit_is_honoured_everywhere() {
    let quit = TickInput::new(0, 0, IntentSet::new().with_pressed(Intent::Quit));
    let mut game = Game::new();
    assert_eq!(game.update(&quit), engine_shared::Flow::Exit);

    let mut d = Driver::started(Intent::SelectLevel1);
    d.idle(5);
    assert_eq!(d.game.update(&quit), engine_shared::Flow::Exit);
}

#[test]
fn clicks_pick_levels_in_the_menu_only() {
    let mut game = Game::new();
    let miss = TickInput::new(1, 0, IntentSet::new()).with_click(100.0, 100.0);
    game.update(&miss);
    assert_eq!(game.phase(), Phase::Menu);

    let hit = TickInput::new(2, 0, IntentSet::new()).with_click(400.0, 390.0);
    game.update(&hit);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.session().level().number(), 2);

    // A click over the old button area while playing does nothing.
    let again = TickInput::new(3, 0, IntentSet::new()).with_click(400.0, 300.0);
    game.update(&again);
    assert_eq!(game.session().level().number(), 2);
}
