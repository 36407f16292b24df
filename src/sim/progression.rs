//! Click handling and level progression
//!
//! The model never fails: out-of-range lookups clamp to safe defaults.

use super::levels::{self, LEVELS};
use super::state::{ClickResult, GameEvent, GameState};
use crate::Rgb;
use crate::consts::*;

/// What the brick should look like for the current level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub scale: f32,
    pub color: Rgb,
    pub is_special: bool,
    pub level: u32,
}

/// Derived values the HUD displays
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub points: u64,
    pub level: u32,
    pub level_name: &'static str,
    pub points_to_next: u64,
    pub progress: f32,
    pub total_clicks: u64,
    pub points_per_click: u64,
}

/// Owns the game state and performs the level-up transition
#[derive(Debug, Clone, Default)]
pub struct ProgressionModel {
    state: GameState,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl ProgressionModel {
    /// Fresh game at level 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state (read-only)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Register a click: pay out, then cascade through every threshold crossed
    pub fn handle_click(&mut self) -> ClickResult {
        self.state.total_clicks = self.state.total_clicks.saturating_add(1);

        let points_earned = self.points_per_click();
        self.state.points = self.state.points.saturating_add(points_earned);
        self.events.push(GameEvent::Clicked { points_earned });

        // Spend the threshold of the level being left, then advance
        let mut levels_gained = 0;
        while self.state.level < MAX_LEVEL {
            let needed = levels::points_to_next_level(self.state.level);
            if self.state.points < needed {
                break;
            }
            self.state.points -= needed;
            self.state.level += 1;
            levels_gained += 1;
            self.events.push(GameEvent::LevelUp { level: self.state.level });
            log::info!(
                "LEVEL UP! Now level {}: {}",
                self.state.level,
                self.current_level_name()
            );
        }

        log::debug!(
            "Click! +{} points. Total: {}",
            points_earned,
            self.state.points
        );

        ClickResult {
            points_earned,
            leveled_up: levels_gained > 0,
            new_level: (levels_gained > 0).then_some(self.state.level),
            levels_gained,
        }
    }

    /// Points per click at the current level
    pub fn points_per_click(&self) -> u64 {
        levels::points_per_click(self.state.level)
    }

    /// Points needed to leave the current level (0 at max level)
    pub fn points_to_next_level(&self) -> u64 {
        levels::points_to_next_level(self.state.level)
    }

    /// Progress toward the next level in [0, 1]
    pub fn level_progress_fraction(&self) -> f32 {
        if self.state.level >= MAX_LEVEL {
            return 1.0;
        }
        let needed = self.points_to_next_level();
        if needed == 0 {
            return 1.0;
        }
        (self.state.points as f64 / needed as f64).clamp(0.0, 1.0) as f32
    }

    /// Display name of the current level
    pub fn current_level_name(&self) -> &'static str {
        levels::level_name(self.state.level)
    }

    /// Copy of the state for persistence
    pub fn snapshot(&self) -> GameState {
        self.state
    }

    /// Replace the state with a saved snapshot (clamped into range)
    pub fn restore(&mut self, snapshot: GameState) {
        let (state, changed) = snapshot.sanitized();
        if changed {
            log::warn!(
                "Restored state out of range (level {}), clamped to level {}",
                snapshot.level,
                state.level
            );
        }
        self.state = state;
        self.events.clear();
    }

    /// Back to `{0, 1, 0}`
    pub fn reset(&mut self) {
        self.state = GameState::default();
        self.events.clear();
    }

    /// Brick appearance for the current level
    pub fn appearance(&self) -> Appearance {
        let cfg = levels::level_config(self.state.level).unwrap_or(&LEVELS[0]);
        Appearance {
            scale: cfg.scale,
            color: cfg.color,
            is_special: cfg.is_special,
            level: self.state.level,
        }
    }

    /// Everything the HUD needs, computed in one place
    pub fn progress_view(&self) -> ProgressView {
        ProgressView {
            points: self.state.points,
            level: self.state.level,
            level_name: self.current_level_name(),
            points_to_next: self.points_to_next_level(),
            progress: self.level_progress_fraction(),
            total_clicks: self.state.total_clicks,
            points_per_click: self.points_per_click(),
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
