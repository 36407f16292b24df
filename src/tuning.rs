//! Animation and HUD tuning
//!
//! Persisted separately from the game save in LocalStorage so feel can be
//! tweaked without touching progression.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Brick animation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickTuning {
    /// How much bigger the brick gets when clicked
    pub click_scale_multiplier: f32,
    /// Lerp speed while the click pop plays
    pub click_animation_speed: f32,
    /// Seconds before the click pop settles back
    pub click_reset_delay: f64,

    /// How big the brick gets on level up
    pub level_up_scale_multiplier: f32,
    /// Lerp speed while the level-up pop plays
    pub level_up_animation_speed: f32,
    /// Seconds before the level-up pop and flash settle back
    pub level_up_reset_delay: f64,
    /// Flash tint on level up
    pub level_up_flash: Rgb,

    /// Snap to target once closer than this
    pub snap_epsilon: f32,

    /// Rainbow hue cycles per second (level 19)
    pub rainbow_speed: f32,

    /// Diamond shimmer (level 20)
    pub shimmer_base: f32,
    pub shimmer_amplitude: f32,
    pub shimmer_frequency: f32,
    pub shimmer_blue_offset: f32,
}

impl Default for BrickTuning {
    fn default() -> Self {
        Self {
            click_scale_multiplier: 1.2,
            click_animation_speed: 10.0,
            click_reset_delay: 0.1,

            level_up_scale_multiplier: 1.5,
            level_up_animation_speed: 5.0,
            level_up_reset_delay: 0.3,
            level_up_flash: Rgb::ONE,

            snap_epsilon: 0.01,

            rainbow_speed: 2.0,

            shimmer_base: 0.8,
            shimmer_amplitude: 0.2,
            shimmer_frequency: 3.0,
            shimmer_blue_offset: 0.1,
        }
    }
}

/// HUD constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudTuning {
    /// Seconds the level-up banner stays up
    pub banner_duration: f64,
    /// Seconds a save/load/reset notice stays up
    pub notice_duration: f64,
    /// Progress above this paints the bar with `almost_there_color`
    pub almost_there_threshold: f32,
    pub normal_progress_color: Rgb,
    pub almost_there_color: Rgb,
    pub max_level_color: Rgb,
}

impl Default for HudTuning {
    fn default() -> Self {
        Self {
            banner_duration: 2.0,
            notice_duration: 1.5,
            almost_there_threshold: 0.8,
            normal_progress_color: Rgb::new(0.2, 0.8, 0.2),
            almost_there_color: Rgb::new(1.0, 0.8, 0.0),
            max_level_color: Rgb::new(0.6, 0.9, 1.0),
        }
    }
}

/// All tunables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub brick: BrickTuning,
    pub hud: HudTuning,
}

impl Tuning {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_clicker_tuning";

    /// Parse tuning JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                log::warn!("Ignoring malformed tuning: {}", e);
                None
            }
        }
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(tuning) = Self::from_json(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"brick":{"rainbow_speed":4.0}}"#).unwrap();
        assert_eq!(tuning.brick.rainbow_speed, 4.0);
        assert_eq!(tuning.brick.click_scale_multiplier, 1.2);
        assert_eq!(tuning.hud.banner_duration, 2.0);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Tuning::from_json("{not json").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let mut tuning = Tuning::default();
        tuning.hud.notice_duration = 0.75;
        let json = serde_json::to_string(&tuning).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.hud.notice_duration, 0.75);
    }
}
