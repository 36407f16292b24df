//! Brick visuals: scale tweening, click/level-up pops and material effects
//!
//! Triggers only move targets and (re)arm timers; `tick` is the single place
//! the scale actually moves, so retriggering mid-animation is always safe.

use crate::consts::*;
use crate::sim::{Appearance, Scheduler};
use crate::tuning::BrickTuning;
use crate::{Rgb, hsv_to_rgb, ping_pong};

/// Which pop is currently playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrickAnimation {
    #[default]
    None,
    Click,
    LevelUp,
}

/// Deferred brick actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrickTimer {
    ResetClick,
    ResetLevelUp,
}

/// What the host draws this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickFrame {
    pub scale: f32,
    pub tint: Rgb,
}

/// Per-frame visual state of the brick
#[derive(Debug, Clone)]
pub struct BrickPresenter {
    tuning: BrickTuning,

    /// Scale we settle back to
    base_scale: f32,
    /// Scale we're animating toward
    target_scale: f32,
    /// Scale drawn this frame
    scale: f32,
    /// Level color
    base_color: Rgb,
    /// Tint drawn this frame
    tint: Rgb,

    animation: BrickAnimation,
    level: u32,
    is_special: bool,
    rainbow_enabled: bool,

    /// Seconds of accumulated frame time
    time: f64,
    timers: Scheduler<BrickTimer>,
}

impl BrickPresenter {
    pub fn new(tuning: BrickTuning) -> Self {
        Self {
            tuning,
            base_scale: 1.0,
            target_scale: 1.0,
            scale: 1.0,
            base_color: Rgb::ONE,
            tint: Rgb::ONE,
            animation: BrickAnimation::None,
            level: START_LEVEL,
            is_special: false,
            rainbow_enabled: false,
            time: 0.0,
            timers: Scheduler::new(),
        }
    }

    /// Adopt the look of a new level
    pub fn on_appearance_changed(&mut self, scale: f32, color: Rgb, is_special: bool, level: u32) {
        self.base_scale = scale;
        self.target_scale = scale;
        self.base_color = color;
        self.tint = color;
        self.is_special = is_special;
        self.level = level;
        self.rainbow_enabled = level == RAINBOW_LEVEL;

        log::debug!(
            "Brick updated: scale={}, color={:?}, special={}",
            scale,
            color,
            is_special
        );
    }

    /// Convenience for `on_appearance_changed` from a model snapshot
    pub fn apply_appearance(&mut self, appearance: &Appearance) {
        self.on_appearance_changed(
            appearance.scale,
            appearance.color,
            appearance.is_special,
            appearance.level,
        );
    }

    /// Short pop on every click
    pub fn on_click_triggered(&mut self) {
        if self.animation != BrickAnimation::LevelUp {
            self.animation = BrickAnimation::Click;
        }
        self.target_scale = self.base_scale * self.tuning.click_scale_multiplier;
        self.timers
            .reschedule(self.time, self.tuning.click_reset_delay, BrickTimer::ResetClick);
    }

    /// Bigger, slower pop with a white flash
    pub fn on_level_up_triggered(&mut self) {
        self.animation = BrickAnimation::LevelUp;
        self.target_scale = self.base_scale * self.tuning.level_up_scale_multiplier;
        self.tint = self.tuning.level_up_flash;

        // The level-up reset restores the base scale itself
        self.timers.cancel(BrickTimer::ResetClick);
        self.timers.reschedule(
            self.time,
            self.tuning.level_up_reset_delay,
            BrickTimer::ResetLevelUp,
        );
    }

    /// Cancel pending resets and settle on the base look immediately
    pub fn clear_effects(&mut self) {
        self.timers.cancel_all();
        self.animation = BrickAnimation::None;
        self.target_scale = self.base_scale;
        self.scale = self.base_scale;
        self.tint = self.base_color;
    }

    /// Advance the clock, fire due resets, then animate
    pub fn tick(&mut self, dt: f32) {
        self.time += dt as f64;

        for timer in self.timers.poll(self.time) {
            match timer {
                BrickTimer::ResetClick => {
                    if self.animation == BrickAnimation::Click {
                        self.animation = BrickAnimation::None;
                    }
                    self.target_scale = self.base_scale;
                }
                BrickTimer::ResetLevelUp => {
                    self.animation = BrickAnimation::None;
                    self.target_scale = self.base_scale;
                    self.tint = self.base_color;
                }
            }
        }

        self.animate_scale(dt);

        if self.rainbow_enabled && self.level == RAINBOW_LEVEL {
            self.tint = self.rainbow_tint();
        }
        if self.level == DIAMOND_LEVEL {
            self.tint = self.shimmer_tint();
        }
    }

    fn animate_scale(&mut self, dt: f32) {
        if self.scale == self.target_scale {
            return;
        }
        let speed = match self.animation {
            BrickAnimation::LevelUp => self.tuning.level_up_animation_speed,
            _ => self.tuning.click_animation_speed,
        };
        let t = (dt * speed).clamp(0.0, 1.0);
        self.scale += (self.target_scale - self.scale) * t;

        // Snap when close so we don't creep forever
        if (self.scale - self.target_scale).abs() < self.tuning.snap_epsilon {
            self.scale = self.target_scale;
        }
    }

    fn rainbow_tint(&self) -> Rgb {
        let hue = ping_pong(self.time as f32 * self.tuning.rainbow_speed, 1.0);
        hsv_to_rgb(hue, 1.0, 1.0)
    }

    fn shimmer_tint(&self) -> Rgb {
        let t = self.time as f32;
        let brightness = self.tuning.shimmer_base
            + (t * self.tuning.shimmer_frequency).sin() * self.tuning.shimmer_amplitude;
        let mut tint = self.base_color * brightness;
        tint.z += self.tuning.shimmer_blue_offset;
        tint.clamp(Rgb::ZERO, Rgb::ONE)
    }

    pub fn frame(&self) -> BrickFrame {
        BrickFrame {
            scale: self.scale,
            tint: self.tint,
        }
    }

    pub fn animation(&self) -> BrickAnimation {
        self.animation
    }

    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    pub fn rainbow_enabled(&self) -> bool {
        self.rainbow_enabled
    }
}

impl Default for BrickPresenter {
    fn default() -> Self {
        Self::new(BrickTuning::default())
    }
}
