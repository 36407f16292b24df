//! Deterministic progression module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Table-driven level data only
//! - Time advances only through explicit `dt`
//! - No rendering or platform dependencies

pub mod levels;
pub mod progression;
pub mod state;
pub mod timer;

pub use levels::{LEVELS, LevelConfig, level_config, level_name, points_per_click, points_to_next_level};
pub use progression::{Appearance, ProgressView, ProgressionModel};
pub use state::{ClickResult, GameEvent, GameState};
pub use timer::Scheduler;
