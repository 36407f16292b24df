//! Presentation layer
//!
//! Consumes progression outputs only. Everything here is driven by explicit
//! `dt` from the host frame clock.

pub mod brick;
pub mod hud;
pub mod ui;

pub use brick::{BrickAnimation, BrickFrame, BrickPresenter};
pub use hud::{Banner, HudField, HudSink, HudState, HudValue, MemoryHud};
pub use ui::{UiEvent, UiPresenter, format_number};
