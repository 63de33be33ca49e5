// crates/platformer_game/src/state.rs

use engine_ecs::{Entity, World};
use engine_shared::{DrawList, Flow, GameLogic, Intent, Rect, TickInput};
use tracing::{info, trace};

use crate::components::{CCoin, CPlayer, CRect};
use crate::level::{LevelData, LevelId};
use crate::session::{Phase, Session};
use crate::tunables::{HEIGHT, WIDTH};
use crate::{menu, present, systems};

/// The whole game: one entity store plus the session phase machine.
#[derive(Default)]
pub struct Game {
    world: World,
    session: Session,
    player: Option<Entity>,
    ticks: u64,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for the inspector and scripted scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn level_data(&self) -> &'static LevelData {
        self.session.level().data()
    }

    pub fn player_entity(&self) -> Option<Entity> {
        self.player
    }

    pub fn player(&self) -> Option<&CPlayer> {
        self.player.and_then(|e| self.world.get_component::<CPlayer>(e))
    }

    pub fn player_rect(&self) -> Option<Rect> {
        self.player.and_then(|e| self.world.get_component::<CRect>(e)).map(|r| r.0)
    }

    pub fn coins_left(&self) -> usize {
        self.world.count::<CCoin>()
    }

    /// Build `level` from scratch and start playing it. Score and lives reset.
    pub fn start_level(&mut self, level: LevelId) {
        self.player = Some(crate::scene::build_level(&mut self.world, level.data()));
        self.session.start(level);
    }

    fn return_to_menu(&mut self) {
        if self.session.return_to_menu() {
            self.world.clear();
            self.player = None;
        }
    }

    /// Advance one tick.
    ///
    /// A tick that begins in the menu only looks for a level choice. Otherwise
    /// restart and menu requests are handled first, and the simulation step
    /// runs if the session is (still, or again) playing.
    pub fn tick(&mut self, input: &TickInput) -> Flow {
        self.ticks += 1;
        let intents = &input.intents;

        if intents.was_pressed(Intent::Quit) {
            info!(tick = input.tick, "quit requested");
            return Flow::Exit;
        }

        if self.session.phase() == Phase::Menu {
            if let Some(level) = menu::selection(input) {
                self.start_level(level);
            }
            return Flow::Continue;
        }

        if intents.was_pressed(Intent::Restart) && self.session.can_restart() {
            self.start_level(self.session.level());
        }
        if intents.was_pressed(Intent::ReturnToMenu) {
            self.return_to_menu();
        }

        if self.session.is_simulating() {
            self.step(input);
        }
        Flow::Continue
    }

    fn step(&mut self, input: &TickInput) {
        let Some(player) = self.player else { return };
        let world = &mut self.world;

        systems::player::apply_intents(world, player, &input.intents);
        systems::player::update_player(world, player);
        systems::enemy::update_enemies(world);
        systems::coin::update_coins(world, input.elapsed_ms);
        systems::collision::resolve_platforms(world, player);
        systems::collision::collect_coins(world, player);

        if systems::collision::enemy_contact(world, player) {
            self.session.lose();
            return;
        }
        if systems::collision::reached_goal(world, player) {
            self.session.win();
        }

        trace!(
            tick = input.tick,
            intents = input.intents.bits(),
            rect = ?self.player_rect(),
            "step"
        );
    }
}

impl GameLogic for Game {
    fn field_size(&self) -> (u32, u32) {
        (WIDTH as u32, HEIGHT as u32)
    }

    fn on_load(&mut self) {
        info!("platformer loaded, waiting in menu");
    }

    fn update(&mut self, input: &TickInput) -> Flow {
        self.tick(input)
    }

    fn draw(&self, elapsed_ms: u64, out: &mut DrawList) {
        present::draw(self, elapsed_ms, out);
    }

    fn inspect(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("phase", format!("{:?}", self.session.phase())),
            ("level", self.session.level().number().to_string()),
            ("level complete", self.session.level_complete().to_string()),
            ("ticks", self.ticks.to_string()),
            ("entities", self.world.len().to_string()),
            ("coins left", self.coins_left().to_string()),
        ];
        if let (Some(p), Some(rect)) = (self.player(), self.player_rect()) {
            rows.push(("score", p.score.to_string()));
            rows.push(("lives", p.lives.to_string()));
            rows.push(("position", format!("({}, {})", rect.x, rect.y)));
            rows.push(("velocity y", format!("{:.1}", p.body.velocity_y)));
            rows.push(("jumping", p.body.jumping.to_string()));
            rows.push(("invincible", p.invincible_timer.max(0).to_string()));
        }
        rows
    }

    fn on_unload(&mut self) {
        info!(ticks = self.ticks, "platformer unloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::IntentSet;

    fn press(intent: Intent) -> TickInput {
        TickInput::new(0, 0, IntentSet::new().with_pressed(intent))
    }

    #[test]
    fn menu_ignores_play_intents() {
        let mut game = Game::new();
        game.tick(&press(Intent::Restart));
        game.tick(&press(Intent::ReturnToMenu));
        game.tick(&press(Intent::Jump));
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.world().is_empty());
    }

    #[test]
    fn selection_does_not_simulate_that_tick() {
        let mut game = Game::new();
        game.tick(&press(Intent::SelectLevel1));
        assert_eq!(game.phase(), Phase::Playing);
        let spawn = game.player_rect().unwrap();
        assert_eq!((spawn.centerx(), spawn.centery()), (100, 500));
    }

    #[test]
    fn quit_exits_from_any_phase() {
        let mut game = Game::new();
        assert_eq!(game.tick(&press(Intent::Quit)), Flow::Exit);
        game.tick(&press(Intent::SelectLevel2));
        assert_eq!(game.tick(&press(Intent::Quit)), Flow::Exit);
    }

    #[test]
    fn menu_return_discards_entities() {
        let mut game = Game::new();
        game.tick(&press(Intent::SelectLevel1));
        game.tick(&press(Intent::ReturnToMenu));
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.world().is_empty());
        assert!(game.player().is_none());
    }

    #[test]
    fn inspector_rows_follow_the_player() {
        let mut game = Game::new();
        assert!(!game.inspect().iter().any(|(k, _)| *k == "score"));
        game.tick(&press(Intent::SelectLevel1));
        let rows = game.inspect();
        assert!(rows.iter().any(|(k, v)| *k == "lives" && v == "2"));
        assert!(rows.iter().any(|(k, v)| *k == "coins left" && v == "12"));
    }
}
