// crates/platformer_game/src/present.rs
//! Builds the per-frame `DrawList`. Read-only over the game state.

use engine_ecs::World;
use engine_shared::{DrawList, Palette, Rect, Rgb, TextAnchor, TextSize, VisualKind};

use crate::components::{CKind, CPalette, CPlayer, CRect, EntityKind};
use crate::level::{LevelData, Theme, NIGHT_SKY};
use crate::menu::{LEVEL_1_BUTTON, LEVEL_2_BUTTON};
use crate::rating::star_rating;
use crate::session::Phase;
use crate::state::Game;
use crate::tunables::{CONTROLS_BAR_HEIGHT, HEIGHT, WIDTH};

const FIELD: Rect = Rect::new(0, 0, WIDTH, HEIGHT);
const CENTER_X: f32 = WIDTH as f32 / 2.0;
const MID_Y: f32 = HEIGHT as f32 / 2.0;

const MENU_SKY: Rgb = Rgb::new(30, 30, 80);
const SUN: Rgb = Rgb::new(255, 255, 100);
const MOON: Rgb = Rgb::new(220, 220, 220);
const STARS: [(i32, i32); 8] =
    [(100, 50), (200, 80), (350, 40), (450, 70), (600, 30), (700, 60), (750, 90), (300, 120)];

/// Entity layers, back to front.
const LAYERS: [(EntityKind, VisualKind); 5] = [
    (EntityKind::Ground, VisualKind::Ground),
    (EntityKind::Platform, VisualKind::Platform),
    (EntityKind::Coin, VisualKind::Coin),
    (EntityKind::Enemy, VisualKind::Enemy),
    (EntityKind::FinishFlag, VisualKind::FinishFlag),
];

pub fn draw(game: &Game, elapsed_ms: u64, out: &mut DrawList) {
    // Letterbox stays black; the field itself is painted by the sky item.
    out.reset(Rgb::BLACK);

    let session = game.session();
    if session.phase() == Phase::Menu {
        draw_menu(out, session.level_complete());
        return;
    }

    let level = game.level_data();
    draw_background(out, level, elapsed_ms);

    let player = game.player().zip(game.player_rect());
    if let Some((player, rect)) = player {
        // Backmost sprite: ground, coins, enemies and the flag all cover it.
        out.push(
            rect,
            VisualKind::Player { veiled: player.veiled() },
            Palette::new(Rgb::BLUE, Rgb::SKIN),
        );
    }
    draw_entities(out, game.world());

    if let Some((player, _)) = player {
        draw_hud(out, level, player);

        match session.phase() {
            Phase::GameOver => draw_game_over(out),
            Phase::Victory => draw_victory(out, level, player),
            Phase::Menu | Phase::Playing => {}
        }
    }
}

fn draw_background(out: &mut DrawList, level: &LevelData, elapsed_ms: u64) {
    out.push(FIELD, VisualKind::Sky, Palette::solid(level.clear_color()));

    match level.theme {
        Theme::Day => {
            let span = (WIDTH + 200) as u64;
            for i in 0..5u64 {
                let x = ((elapsed_ms / 50 + i * 200) % span) as i32 - 100;
                let y = 80 + 40 * i as i32;
                // Bounding box of the three puffs; the top one sits 20 above `y`.
                let puffs = Rect::new(x, y - 20, 130, 60);
                out.push(puffs, VisualKind::Cloud, Palette::solid(Rgb::WHITE));
            }
            out.push(Rect::from_center(700, 80, 80, 80), VisualKind::Sun, Palette::solid(SUN));
        }
        Theme::Night => {
            let lit = elapsed_ms % 1000 < 500;
            for (x, y) in STARS {
                out.push(
                    Rect::from_center(x, y, 4, 4),
                    VisualKind::Star { lit },
                    Palette::new(Rgb::WHITE, Rgb::YELLOW),
                );
            }
            out.push(
                Rect::from_center(100, 80, 60, 60),
                VisualKind::Moon,
                Palette::new(MOON, NIGHT_SKY),
            );
        }
    }
}

fn draw_entities(out: &mut DrawList, world: &World) {
    let Some(kinds) = world.query::<CKind>() else {
        return;
    };
    for (kind, visual) in LAYERS {
        for (entity, _) in kinds.iter().filter(|(_, k)| k.0 == kind) {
            let Some(rect) = world.get_component::<CRect>(*entity) else {
                continue;
            };
            let palette = world
                .get_component::<CPalette>(*entity)
                .map(|p| p.0)
                .unwrap_or(Palette::solid(Rgb::GRAY));
            out.push(rect.0, visual, palette);
        }
    }
}

fn controls_bar(out: &mut DrawList) {
    out.push(
        Rect::new(0, HEIGHT - CONTROLS_BAR_HEIGHT, WIDTH, CONTROLS_BAR_HEIGHT),
        VisualKind::ControlsBar,
        Palette::solid(Rgb::LIGHT_GREEN),
    );
}

fn draw_hud(out: &mut DrawList, level: &LevelData, player: &CPlayer) {
    let ink = match level.theme {
        Theme::Day => Rgb::BLACK,
        Theme::Night => Rgb::WHITE,
    };
    let score = format!("Score: {}", player.score);
    out.text(10.0, 10.0, TextAnchor::TopLeft, TextSize::Medium, ink, score);
    out.text(
        (WIDTH - 120) as f32,
        10.0,
        TextAnchor::TopLeft,
        TextSize::Medium,
        Rgb::RED,
        format!("Lives: {}", player.lives),
    );
    out.text(
        CENTER_X,
        10.0,
        TextAnchor::TopCenter,
        TextSize::Medium,
        ink,
        format!("Level: {}", level.id.number()),
    );

    controls_bar(out);
    out.text(
        10.0,
        (HEIGHT - 30) as f32,
        TextAnchor::TopLeft,
        TextSize::Small,
        Rgb::BLACK,
        "Controls: \u{2190} \u{2192} move, \u{2191} jump, R restart, ESC menu",
    );
}

fn dim(out: &mut DrawList) {
    out.push(FIELD, VisualKind::Dim, Palette::solid(Rgb::BLACK));
}

fn draw_game_over(out: &mut DrawList) {
    dim(out);
    let lines = [
        (MID_Y - 50.0, TextSize::Large, Rgb::RED, "GAME OVER!"),
        (MID_Y + 10.0, TextSize::Medium, Rgb::WHITE, "Press R to restart the level"),
        (MID_Y + 50.0, TextSize::Medium, Rgb::WHITE, "Press ESC to return to the menu"),
    ];
    for (y, size, color, text) in lines {
        out.text(CENTER_X, y, TextAnchor::TopCenter, size, color, text);
    }
}

fn draw_victory(out: &mut DrawList, level: &LevelData, player: &CPlayer) {
    let total = level.total_coins();
    let collected = player.coins_collected();
    let stars = star_rating(collected, total);
    let coins = format!("Coins collected: {collected}/{total}");

    dim(out);
    let lines = [
        (MID_Y - 80.0, TextSize::Large, Rgb::GREEN, "LEVEL COMPLETE!".to_string()),
        (MID_Y - 30.0, TextSize::Medium, Rgb::YELLOW, format!("Stars: {stars}")),
        (MID_Y + 10.0, TextSize::Medium, Rgb::WHITE, coins),
        (MID_Y + 50.0, TextSize::Medium, Rgb::WHITE, "Press ESC to return to the menu".to_string()),
        (MID_Y + 90.0, TextSize::Medium, Rgb::WHITE, "Press R to restart the level".to_string()),
    ];
    for (y, size, color, text) in lines {
        out.text(CENTER_X, y, TextAnchor::TopCenter, size, color, text);
    }

    // Star outline spans 20 either side of its anchor, 20 above to 30 below.
    let stars = stars as i32;
    let anchor_y = HEIGHT / 2 + 130;
    for i in 0..stars {
        let x = WIDTH / 2 - stars * 25 + i * 50;
        let outline = Rect::new(x - 20, anchor_y - 20, 40, 50);
        out.push(outline, VisualKind::RatingStar, Palette::solid(Rgb::YELLOW));
    }
}

fn draw_menu(out: &mut DrawList, level_complete: bool) {
    out.push(FIELD, VisualKind::Sky, Palette::solid(MENU_SKY));

    let headings = [
        (100.0, TextSize::Large, Rgb::WHITE, "SELECT A LEVEL"),
        (180.0, TextSize::Medium, Rgb::LIGHT_BLUE, "Level 1: Day world"),
        (220.0, TextSize::Medium, Rgb::ORANGE, "Level 2: Night adventure"),
    ];
    for (y, size, color, text) in headings {
        out.text(CENTER_X, y, TextAnchor::TopCenter, size, color, text);
    }

    out.push(LEVEL_1_BUTTON, VisualKind::Button, Palette::solid(Rgb::BLUE));
    out.push(LEVEL_2_BUTTON, VisualKind::Button, Palette::solid(Rgb::DARK_BLUE));
    out.text(CENTER_X, 300.0, TextAnchor::TopCenter, TextSize::Medium, Rgb::WHITE, "PLAY LEVEL 1");
    out.text(CENTER_X, 380.0, TextAnchor::TopCenter, TextSize::Medium, Rgb::WHITE, "PLAY LEVEL 2");

    controls_bar(out);
    out.text(
        CENTER_X,
        (HEIGHT - 30) as f32,
        TextAnchor::TopCenter,
        TextSize::Small,
        Rgb::BLACK,
        "Controls: \u{2190} \u{2192} move, \u{2191} jump, R restart level, ESC menu",
    );

    if level_complete {
        out.text(
            CENTER_X,
            450.0,
            TextAnchor::TopCenter,
            TextSize::Medium,
            Rgb::GREEN,
            "Level complete! Choose the next level",
        );
    }
}
