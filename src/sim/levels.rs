//! Per-level configuration table
//!
//! One record per level replaces the old set of parallel arrays, so a level's
//! threshold, scale, color, payout and name can never drift out of alignment.

use crate::Rgb;
use crate::consts::*;

/// Immutable configuration for a single level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// Points needed to advance to the next level (`None` only at max level)
    pub points_to_next: Option<u64>,
    /// Brick scale
    pub scale: f32,
    /// Brick base color
    pub color: Rgb,
    /// Points awarded per click
    pub points_per_click: u64,
    /// Display name
    pub name: &'static str,
    /// Special material (levels 17-20)
    pub is_special: bool,
}

const fn level(
    points_to_next: Option<u64>,
    scale: f32,
    color: [f32; 3],
    points_per_click: u64,
    name: &'static str,
    is_special: bool,
) -> LevelConfig {
    LevelConfig {
        points_to_next,
        scale,
        color: Rgb::new(color[0], color[1], color[2]),
        points_per_click,
        name,
        is_special,
    }
}

const RED: [f32; 3] = [0.8, 0.1, 0.1];

/// All 20 levels, index 0 = level 1
pub const LEVELS: [LevelConfig; MAX_LEVEL as usize] = [
    // Size progression - brick grows
    level(Some(10), 0.5, RED, 1, "1x1 Brick", false),
    level(Some(25), 0.6, RED, 1, "1x2 Brick", false),
    level(Some(50), 0.7, RED, 1, "1x3 Brick", false),
    level(Some(100), 0.8, RED, 1, "1x4 Brick", false),
    level(Some(200), 0.9, RED, 1, "2x2 Brick", false),
    level(Some(400), 1.0, RED, 1, "2x3 Brick", false),
    level(Some(800), 1.1, RED, 1, "2x4 Brick", false),
    level(Some(1_500), 1.2, RED, 1, "2x4 Brick", false),
    // Color progression - same size, new paint
    level(Some(2_500), 1.2, [0.9, 0.2, 0.2], 2, "Red Brick", false),
    level(Some(4_000), 1.2, [0.2, 0.4, 0.9], 2, "Blue Brick", false),
    level(Some(6_000), 1.2, [0.2, 0.8, 0.3], 2, "Green Brick", false),
    level(Some(9_000), 1.2, [0.95, 0.9, 0.2], 2, "Yellow Brick", false),
    level(Some(13_000), 1.2, [1.0, 0.5, 0.0], 3, "Orange Brick", false),
    level(Some(18_000), 1.2, [0.6, 0.2, 0.8], 3, "Purple Brick", false),
    level(Some(25_000), 1.2, [1.0, 0.4, 0.7], 3, "Pink Brick", false),
    level(Some(35_000), 1.2, [0.15, 0.15, 0.15], 3, "Black Brick", false),
    // Special materials
    level(Some(50_000), 1.2, [0.75, 0.75, 0.8], 5, "Silver Brick", true),
    level(Some(75_000), 1.2, [1.0, 0.84, 0.0], 5, "Gold Brick", true),
    level(Some(100_000), 1.2, [1.0, 0.5, 0.5], 5, "Rainbow Brick", true),
    level(None, 1.2, [0.6, 0.9, 1.0], 10, "Diamond Brick", true),
];

/// Look up a level's config (`None` outside 1..=20)
#[inline]
pub fn level_config(level: u32) -> Option<&'static LevelConfig> {
    let index = (level as usize).checked_sub(1)?;
    LEVELS.get(index)
}

/// Points awarded per click at `level` (1 when out of range)
pub fn points_per_click(level: u32) -> u64 {
    level_config(level).map_or(1, |c| c.points_per_click)
}

/// Points needed to leave `level` (0 at max level, sentinel when out of range)
pub fn points_to_next_level(level: u32) -> u64 {
    if level >= MAX_LEVEL {
        return 0;
    }
    level_config(level)
        .and_then(|c| c.points_to_next)
        .unwrap_or(THRESHOLD_SENTINEL)
}

/// Display name for `level` ("Unknown" when out of range)
pub fn level_name(level: u32) -> &'static str {
    level_config(level).map_or("Unknown", |c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(LEVELS.len(), 20);
        // Only the last level lacks a threshold
        for (i, cfg) in LEVELS.iter().enumerate() {
            assert_eq!(cfg.points_to_next.is_none(), i == 19, "level {}", i + 1);
        }
        // Thresholds never decrease
        let thresholds: Vec<u64> = LEVELS.iter().filter_map(|c| c.points_to_next).collect();
        assert!(thresholds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_special_levels() {
        for level in 1..=MAX_LEVEL {
            let cfg = level_config(level).unwrap();
            assert_eq!(cfg.is_special, level >= FIRST_SPECIAL_LEVEL);
        }
    }

    #[test]
    fn test_points_per_click_tiers() {
        for level in 1..=8 {
            assert_eq!(points_per_click(level), 1);
        }
        for level in 9..=12 {
            assert_eq!(points_per_click(level), 2);
        }
        for level in 13..=16 {
            assert_eq!(points_per_click(level), 3);
        }
        for level in 17..=19 {
            assert_eq!(points_per_click(level), 5);
        }
        assert_eq!(points_per_click(20), 10);
    }

    #[test]
    fn test_out_of_range_fallbacks() {
        assert_eq!(points_per_click(0), 1);
        assert_eq!(points_per_click(21), 1);
        assert_eq!(points_to_next_level(0), THRESHOLD_SENTINEL);
        assert_eq!(points_to_next_level(20), 0);
        assert_eq!(points_to_next_level(99), 0);
        assert_eq!(level_name(0), "Unknown");
        assert_eq!(level_name(21), "Unknown");
    }

    #[test]
    fn test_lookups() {
        assert_eq!(points_to_next_level(1), 10);
        assert_eq!(points_to_next_level(19), 100_000);
        assert_eq!(level_name(1), "1x1 Brick");
        assert_eq!(level_name(19), "Rainbow Brick");
        assert_eq!(level_name(20), "Diamond Brick");
        assert!((level_config(6).unwrap().scale - 1.0).abs() < f32::EPSILON);
    }
}
