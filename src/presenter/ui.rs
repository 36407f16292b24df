//! HUD presenter: formats progression values and runs the banner timer

use super::hud::{HudField, HudSink, HudState};
use crate::consts::*;
use crate::sim::{ProgressView, Scheduler};
use crate::tuning::HudTuning;

/// Deferred HUD actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiTimer {
    HideBanner,
}

/// Things the HUD did on its own during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    BannerHidden,
}

pub struct UiPresenter {
    tuning: HudTuning,
    hud: HudState,
    time: f64,
    timers: Scheduler<UiTimer>,
    /// Fields already reported as unbound
    warned: Vec<HudField>,
}

impl UiPresenter {
    pub fn new(tuning: HudTuning) -> Self {
        Self {
            tuning,
            hud: HudState::default(),
            time: 0.0,
            timers: Scheduler::new(),
            warned: Vec::new(),
        }
    }

    /// Rewrite every progression field
    pub fn refresh(&mut self, view: &ProgressView) {
        let hud = &mut self.hud;
        hud.score_text = format_number(view.points);
        hud.level_text = format!("Level {}", view.level);
        hud.level_name_text = view.level_name.to_string();
        hud.progress_value = view.progress;

        hud.progress_label = if view.level >= MAX_LEVEL {
            "MAX LEVEL!".to_string()
        } else {
            format!(
                "{} / {}",
                format_number(view.points),
                format_number(view.points_to_next)
            )
        };

        hud.progress_bar_tint = if view.level >= MAX_LEVEL {
            self.tuning.max_level_color
        } else if view.progress > self.tuning.almost_there_threshold {
            self.tuning.almost_there_color
        } else {
            self.tuning.normal_progress_color
        };

        hud.total_clicks_text = format!("Clicks: {}", format_number(view.total_clicks));
        hud.points_per_click_text = format!("+{} per click", view.points_per_click);
    }

    /// Show `message` for the banner duration, restarting any pending hide
    pub fn show_banner(&mut self, message: &str) {
        self.show_for(message, self.tuning.banner_duration);
    }

    /// Level-up celebration banner
    pub fn show_level_up(&mut self, level: u32, level_name: &str) {
        self.show_banner(&format!("LEVEL UP!\nLevel {}\n{}", level, level_name));
    }

    /// Short-lived banner for save/load/reset feedback
    pub fn show_notice(&mut self, message: &str) {
        self.show_for(message, self.tuning.notice_duration);
    }

    fn show_for(&mut self, message: &str, duration: f64) {
        self.hud.banner.text = message.to_string();
        self.hud.banner.visible = true;
        self.timers.reschedule(self.time, duration, UiTimer::HideBanner);
    }

    /// Hide the banner now and drop its pending timer
    pub fn hide_banner(&mut self) {
        self.timers.cancel(UiTimer::HideBanner);
        self.hud.banner.visible = false;
    }

    /// Advance the clock and fire the banner timer if due
    pub fn tick(&mut self, dt: f32) -> Option<UiEvent> {
        self.time += dt as f64;
        let mut event = None;
        for timer in self.timers.poll(self.time) {
            match timer {
                UiTimer::HideBanner => {
                    self.hud.banner.visible = false;
                    event = Some(UiEvent::BannerHidden);
                }
            }
        }
        event
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    /// Push the HUD into the host. Unbound fields are skipped and reported once.
    pub fn apply(&mut self, sink: &mut dyn HudSink) {
        for field in self.hud.write_to(sink) {
            if !self.warned.contains(&field) {
                log::warn!("HUD field '{}' not bound, skipping", field.as_str());
                self.warned.push(field);
            }
        }
    }
}

impl Default for UiPresenter {
    fn default() -> Self {
        Self::new(HudTuning::default())
    }
}

/// Group digits in thousands: 1234567 -> "1,234,567"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
