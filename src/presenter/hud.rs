//! HUD output record and the host-side sink it is written into

use std::collections::HashMap;

use crate::Rgb;

/// Named HUD targets a host can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudField {
    Score,
    Level,
    LevelName,
    ProgressValue,
    ProgressLabel,
    ProgressTint,
    TotalClicks,
    PointsPerClick,
    BannerText,
    BannerVisible,
}

impl HudField {
    pub const ALL: [HudField; 10] = [
        HudField::Score,
        HudField::Level,
        HudField::LevelName,
        HudField::ProgressValue,
        HudField::ProgressLabel,
        HudField::ProgressTint,
        HudField::TotalClicks,
        HudField::PointsPerClick,
        HudField::BannerText,
        HudField::BannerVisible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HudField::Score => "score",
            HudField::Level => "level",
            HudField::LevelName => "level-name",
            HudField::ProgressValue => "progress-value",
            HudField::ProgressLabel => "progress-label",
            HudField::ProgressTint => "progress-tint",
            HudField::TotalClicks => "total-clicks",
            HudField::PointsPerClick => "points-per-click",
            HudField::BannerText => "banner-text",
            HudField::BannerVisible => "banner-visible",
        }
    }
}

/// A value written into one HUD target
#[derive(Debug, Clone, PartialEq)]
pub enum HudValue<'a> {
    Text(&'a str),
    Fraction(f32),
    Color(Rgb),
    Visible(bool),
}

/// Host-side HUD binding
pub trait HudSink {
    /// Write one field. Returns false when the host has nothing bound to it.
    fn write(&mut self, field: HudField, value: HudValue<'_>) -> bool;
}

/// Banner state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banner {
    pub visible: bool,
    pub text: String,
}

/// Everything the HUD shows this frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    pub score_text: String,
    pub level_text: String,
    pub level_name_text: String,
    pub progress_value: f32,
    pub progress_label: String,
    pub progress_bar_tint: Rgb,
    pub total_clicks_text: String,
    pub points_per_click_text: String,
    pub banner: Banner,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            score_text: "0".to_string(),
            level_text: String::new(),
            level_name_text: String::new(),
            progress_value: 0.0,
            progress_label: String::new(),
            progress_bar_tint: Rgb::ZERO,
            total_clicks_text: String::new(),
            points_per_click_text: String::new(),
            banner: Banner::default(),
        }
    }
}

impl HudState {
    /// Write every field into `sink`, returning the fields it had no target for
    pub fn write_to(&self, sink: &mut dyn HudSink) -> Vec<HudField> {
        let writes = [
            (HudField::Score, HudValue::Text(&self.score_text)),
            (HudField::Level, HudValue::Text(&self.level_text)),
            (HudField::LevelName, HudValue::Text(&self.level_name_text)),
            (HudField::ProgressValue, HudValue::Fraction(self.progress_value)),
            (HudField::ProgressLabel, HudValue::Text(&self.progress_label)),
            (HudField::ProgressTint, HudValue::Color(self.progress_bar_tint)),
            (HudField::TotalClicks, HudValue::Text(&self.total_clicks_text)),
            (HudField::PointsPerClick, HudValue::Text(&self.points_per_click_text)),
            (HudField::BannerText, HudValue::Text(&self.banner.text)),
            (HudField::BannerVisible, HudValue::Visible(self.banner.visible)),
        ];

        writes
            .into_iter()
            .filter_map(|(field, value)| (!sink.write(field, value)).then_some(field))
            .collect()
    }
}

/// Last value written per field, stored as text
///
/// Used by the native host and tests. Fields can be left unbound to exercise
/// the missing-target path.
#[derive(Debug, Clone)]
pub struct MemoryHud {
    bound: Vec<HudField>,
    values: HashMap<HudField, String>,
}

impl Default for MemoryHud {
    fn default() -> Self {
        Self::with_fields(&HudField::ALL)
    }
}

impl MemoryHud {
    /// Bind only `fields`
    pub fn with_fields(fields: &[HudField]) -> Self {
        Self {
            bound: fields.to_vec(),
            values: HashMap::new(),
        }
    }

    pub fn get(&self, field: HudField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

impl HudSink for MemoryHud {
    fn write(&mut self, field: HudField, value: HudValue<'_>) -> bool {
        if !self.bound.contains(&field) {
            return false;
        }
        let text = match value {
            HudValue::Text(text) => text.to_string(),
            HudValue::Fraction(f) => format!("{:.3}", f),
            HudValue::Color(c) => format!("{:.2},{:.2},{:.2}", c.x, c.y, c.z),
            HudValue::Visible(v) => v.to_string(),
        };
        self.values.insert(field, text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_reports_unbound() {
        let hud = HudState {
            score_text: "1,234".to_string(),
            ..Default::default()
        };
        let mut sink = MemoryHud::with_fields(&[HudField::Score, HudField::BannerVisible]);
        let missing = hud.write_to(&mut sink);

        assert_eq!(missing.len(), HudField::ALL.len() - 2);
        assert!(!missing.contains(&HudField::Score));
        assert_eq!(sink.get(HudField::Score), Some("1,234"));
        assert_eq!(sink.get(HudField::BannerVisible), Some("false"));
        assert_eq!(sink.get(HudField::Level), None);
    }

    #[test]
    fn test_fully_bound_sink() {
        let mut sink = MemoryHud::default();
        assert!(HudState::default().write_to(&mut sink).is_empty());
        assert_eq!(sink.get(HudField::ProgressValue), Some("0.000"));
    }
}
