//! Game orchestration
//!
//! Owns the progression model and both presenters, and routes model outputs to
//! them. Hosts construct one `Game` and feed it clicks and frame ticks.

use crate::persistence::{self, KeyValueStore};
use crate::presenter::{BrickFrame, BrickPresenter, HudSink, HudState, UiEvent, UiPresenter};
use crate::sim::{ClickResult, GameEvent, GameState, ProgressionModel, level_name};
use crate::tuning::Tuning;

/// Everything the host draws for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub brick: BrickFrame,
    pub hud: &'a HudState,
}

pub struct Game {
    model: ProgressionModel,
    brick: BrickPresenter,
    ui: UiPresenter,
}

impl Game {
    /// Fresh game at level 1
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_parts(
            ProgressionModel::new(),
            BrickPresenter::new(tuning.brick.clone()),
            UiPresenter::new(tuning.hud.clone()),
        )
    }

    /// Assemble from pre-built parts; presenters are synced to the model
    pub fn with_parts(model: ProgressionModel, brick: BrickPresenter, ui: UiPresenter) -> Self {
        let mut game = Self { model, brick, ui };
        game.sync_presenters();
        game
    }

    /// Primary interaction on the brick
    pub fn click(&mut self) -> ClickResult {
        let result = self.model.handle_click();
        self.brick.on_click_triggered();

        if result.leveled_up {
            self.brick.apply_appearance(&self.model.appearance());
            self.brick.on_level_up_triggered();
        }

        // On a cascade each level re-arms the banner, so the last one is shown
        for event in self.model.drain_events() {
            if let GameEvent::LevelUp { level } = event {
                self.ui.show_level_up(level, level_name(level));
            }
        }

        self.ui.refresh(&self.model.progress_view());
        result
    }

    /// Per-frame update of animations and timers
    pub fn tick(&mut self, dt: f32) -> Option<UiEvent> {
        self.brick.tick(dt);
        self.ui.tick(dt)
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            brick: self.brick.frame(),
            hud: self.ui.hud(),
        }
    }

    /// Push the HUD into host widgets
    pub fn apply_hud(&mut self, sink: &mut dyn HudSink) {
        self.ui.apply(sink);
    }

    pub fn save(&mut self, store: &mut dyn KeyValueStore) {
        let state = self.model.snapshot();
        persistence::save_state(store, &state);
        log::info!("Game saved (level {}, {} points)", state.level, state.points);
        self.ui.show_notice("Game Saved!");
    }

    /// Restore from `store`. Returns false (and changes nothing) if no save exists.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> bool {
        let Some(state) = persistence::load_state(store) else {
            log::info!("No saved game found");
            return false;
        };
        self.restore(state);
        log::info!("Game loaded (level {})", self.model.state().level);
        self.ui.show_notice("Game Loaded!");
        true
    }

    /// Back to level 1 and forget the save
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) {
        self.model.reset();
        persistence::clear_state(store);
        self.sync_presenters();
        log::info!("Game reset");
        self.ui.show_notice("Game Reset!");
    }

    /// Replace the state and re-derive every output
    pub fn restore(&mut self, state: GameState) {
        self.model.restore(state);
        self.sync_presenters();
    }

    pub fn snapshot(&self) -> GameState {
        self.model.snapshot()
    }

    pub fn model(&self) -> &ProgressionModel {
        &self.model
    }

    pub fn brick(&self) -> &BrickPresenter {
        &self.brick
    }

    pub fn ui(&self) -> &UiPresenter {
        &self.ui
    }

    /// Fresh appearance update: drop in-flight effects, then redraw from the model
    fn sync_presenters(&mut self) {
        self.brick.apply_appearance(&self.model.appearance());
        self.brick.clear_effects();
        self.ui.refresh(&self.model.progress_view());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;
    use crate::persistence::{KEY_LEVEL, MemoryStore};
    use crate::presenter::BrickAnimation;

    fn game() -> Game {
        Game::new(&Tuning::default())
    }

    #[test]
    fn test_new_game_outputs() {
        let game = game();
        let frame = game.frame();
        assert_eq!(frame.brick.scale, 0.5);
        assert_eq!(frame.brick.tint, Rgb::new(0.8, 0.1, 0.1));
        assert_eq!(frame.hud.level_text, "Level 1");
        assert_eq!(frame.hud.progress_label, "0 / 10");
        assert!(!frame.hud.banner.visible);
    }

    #[test]
    fn test_click_updates_hud_and_pops() {
        let mut game = game();
        game.click();
        assert_eq!(game.frame().hud.score_text, "1");
        assert_eq!(game.frame().hud.total_clicks_text, "Clicks: 1");
        assert_eq!(game.brick().animation(), BrickAnimation::Click);
        assert!((game.brick().target_scale() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_level_up_shows_banner_and_new_look() {
        let mut game = game();
        for _ in 0..10 {
            game.click();
        }
        let hud = game.frame().hud;
        assert_eq!(hud.level_text, "Level 2");
        assert!(hud.banner.visible);
        assert_eq!(hud.banner.text, "LEVEL UP!\nLevel 2\n1x2 Brick");
        assert_eq!(game.brick().base_scale(), 0.6);
        assert_eq!(game.brick().animation(), BrickAnimation::LevelUp);
        assert_eq!(game.frame().brick.tint, Rgb::ONE);
    }

    #[test]
    fn test_cascade_banner_names_final_level() {
        let mut game = game();
        game.restore(GameState { points: 99, level: 1, total_clicks: 0 });
        let result = game.click();
        assert_eq!(result.new_level, Some(4));
        assert_eq!(game.frame().hud.banner.text, "LEVEL UP!\nLevel 4\n1x4 Brick");
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut game = game();
        for _ in 0..37 {
            game.click();
        }
        game.save(&mut store);
        let saved = game.snapshot();
        let hud_before = game.frame().hud.clone();

        let mut other = Game::new(&Tuning::default());
        assert!(other.load(&store));
        assert_eq!(other.snapshot(), saved);
        assert_eq!(other.frame().hud.score_text, hud_before.score_text);
        assert_eq!(other.frame().hud.progress_label, hud_before.progress_label);
        assert_eq!(other.frame().hud.banner.text, "Game Loaded!");
    }

    #[test]
    fn test_load_without_save_is_noop() {
        let store = MemoryStore::new();
        let mut game = game();
        game.click();
        assert!(!game.load(&store));
        assert_eq!(game.snapshot().total_clicks, 1);
    }

    #[test]
    fn test_reset_clears_store_and_effects() {
        let mut store = MemoryStore::new();
        let mut game = game();
        game.restore(GameState { points: 9, level: 6, total_clicks: 50 });
        game.save(&mut store);
        game.click();
        game.click();

        game.reset(&mut store);
        assert_eq!(store.get_int(KEY_LEVEL), None);
        assert_eq!(game.snapshot(), GameState::default());
        assert_eq!(game.brick().animation(), BrickAnimation::None);
        assert_eq!(game.frame().hud.banner.text, "Game Reset!");

        // Stale level-up reset must not disturb the fresh brick
        for _ in 0..100 {
            game.tick(0.01);
        }
        assert_eq!(game.frame().brick.scale, 0.5);
        assert_eq!(game.frame().brick.tint, Rgb::new(0.8, 0.1, 0.1));
    }

    #[test]
    fn test_tick_reports_banner_hide() {
        let mut game = game();
        let mut store = MemoryStore::new();
        game.save(&mut store);
        let hides = (0..200).filter_map(|_| game.tick(0.01)).count();
        assert_eq!(hides, 1);
        assert!(!game.frame().hud.banner.visible);
    }
}
