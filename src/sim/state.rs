//! Game state and progression events
//!
//! Everything that must survive a save/load lives in `GameState`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Complete persisted game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Points banked toward the next level
    pub points: u64,
    /// Current level (1-20)
    pub level: u32,
    /// Lifetime click count
    pub total_clicks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            points: 0,
            level: START_LEVEL,
            total_clicks: 0,
        }
    }
}

impl GameState {
    /// Clamp a possibly corrupt snapshot into a playable state.
    /// Returns the sanitized state and whether anything changed.
    pub fn sanitized(self) -> (Self, bool) {
        let level = self.level.clamp(START_LEVEL, MAX_LEVEL);
        let fixed = Self { level, ..self };
        (fixed, fixed != self)
    }
}

/// Outcome of a single click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickResult {
    /// Points awarded by this click
    pub points_earned: u64,
    /// True if at least one level was gained
    pub leveled_up: bool,
    /// Level after the click, set only when a level-up happened
    pub new_level: Option<u32>,
    /// Number of levels gained (more than 1 on a cascade)
    pub levels_gained: u32,
}

/// Discrete events raised by the model for presenters/hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Brick was clicked and paid out
    Clicked { points_earned: u64 },
    /// A level threshold was crossed (one per level on a cascade)
    LevelUp { level: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fresh_game() {
        let state = GameState::default();
        assert_eq!(state.points, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.total_clicks, 0);
    }

    #[test]
    fn test_sanitized_clamps_level() {
        let (state, changed) = GameState { points: 5, level: 0, total_clicks: 3 }.sanitized();
        assert!(changed);
        assert_eq!(state.level, 1);
        assert_eq!(state.points, 5);

        let (state, changed) = GameState { points: 0, level: 42, total_clicks: 0 }.sanitized();
        assert!(changed);
        assert_eq!(state.level, 20);

        let good = GameState { points: 7, level: 12, total_clicks: 99 };
        assert_eq!(good.sanitized(), (good, false));
    }

    #[test]
    fn test_state_json_roundtrip() {
        let state = GameState { points: 1234, level: 9, total_clicks: 4321 };
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
