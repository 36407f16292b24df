//! Brick Clicker - An incremental clicker with 20 levels of bricks
//!
//! Core modules:
//! - `sim`: Deterministic progression (level table, game state, level-ups, timers)
//! - `presenter`: Brick tweening/effects and HUD formatting
//! - `game`: Wires the model to both presenters
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Flat key-value save/load
//! - `tuning`: Data-driven animation and UI constants

pub mod game;
pub mod persistence;
pub mod platform;
pub mod presenter;
pub mod sim;
pub mod tuning;

pub use game::{Frame, Game};
pub use tuning::Tuning;

/// RGB color, each channel nominally in [0, 1]
pub type Rgb = glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Highest reachable level
    pub const MAX_LEVEL: u32 = 20;
    /// Level every new game starts at
    pub const START_LEVEL: u32 = 1;
    /// Returned by threshold lookups for levels outside the table
    pub const THRESHOLD_SENTINEL: u64 = 999_999;
    /// First level rendered with a special material
    pub const FIRST_SPECIAL_LEVEL: u32 = 17;
    /// Level that cycles through the rainbow
    pub const RAINBOW_LEVEL: u32 = 19;
    /// Level that shimmers like a diamond
    pub const DIAMOND_LEVEL: u32 = 20;
}

/// Bounce `t` back and forth between 0 and `length`
#[inline]
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = length * 2.0;
    let wrapped = t - (t / period).floor() * period;
    length - (wrapped - length).abs()
}

/// Convert HSV (all components in [0, 1]) to RGB
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let h = (hue.rem_euclid(1.0) * 6.0) % 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match sector as u32 {
        0 => Rgb::new(value, t, p),
        1 => Rgb::new(q, value, p),
        2 => Rgb::new(p, value, t),
        3 => Rgb::new(p, q, value),
        4 => Rgb::new(t, p, value),
        _ => Rgb::new(value, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong_bounces() {
        assert!((ping_pong(0.0, 1.0) - 0.0).abs() < 1e-6);
        assert!((ping_pong(0.25, 1.0) - 0.25).abs() < 1e-6);
        assert!((ping_pong(1.0, 1.0) - 1.0).abs() < 1e-6);
        assert!((ping_pong(1.25, 1.0) - 0.75).abs() < 1e-6);
        assert!((ping_pong(2.0, 1.0) - 0.0).abs() < 1e-6);
        assert!((ping_pong(3.5, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hsv_primaries() {
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((red - Rgb::new(1.0, 0.0, 0.0)).length() < 1e-5);

        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!((green - Rgb::new(0.0, 1.0, 0.0)).length() < 1e-5);

        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!((blue - Rgb::new(0.0, 0.0, 1.0)).length() < 1e-5);

        // Hue 1.0 wraps back to red
        let wrapped = hsv_to_rgb(1.0, 1.0, 1.0);
        assert!((wrapped - red).length() < 1e-5);
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        let gray = hsv_to_rgb(0.42, 0.0, 0.5);
        assert!((gray - Rgb::splat(0.5)).length() < 1e-5);
    }
}
