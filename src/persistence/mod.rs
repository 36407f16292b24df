//! Save/load as a flat key-value record
//!
//! Three integer fields: `CurrentPoints`, `CurrentLevel`, `TotalClicks`.
//! A record without `CurrentLevel` counts as no save at all.

use std::collections::HashMap;

use crate::sim::GameState;

pub const KEY_POINTS: &str = "CurrentPoints";
pub const KEY_LEVEL: &str = "CurrentLevel";
pub const KEY_CLICKS: &str = "TotalClicks";

/// Host-provided integer key-value storage
pub trait KeyValueStore {
    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);
    fn remove(&mut self, key: &str);
}

/// In-memory store (native host and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Write the state's three fields
pub fn save_state(store: &mut dyn KeyValueStore, state: &GameState) {
    store.set_int(KEY_POINTS, to_stored(state.points));
    store.set_int(KEY_LEVEL, i64::from(state.level));
    store.set_int(KEY_CLICKS, to_stored(state.total_clicks));
}

/// Read a saved state, or `None` when nothing was saved
pub fn load_state(store: &dyn KeyValueStore) -> Option<GameState> {
    let level = store.get_int(KEY_LEVEL)?;
    let defaults = GameState::default();

    Some(GameState {
        points: from_stored(store.get_int(KEY_POINTS), defaults.points),
        level: u32::try_from(level).unwrap_or(0),
        total_clicks: from_stored(store.get_int(KEY_CLICKS), defaults.total_clicks),
    })
}

/// Remove all three keys (equivalent to a reset)
pub fn clear_state(store: &mut dyn KeyValueStore) {
    store.remove(KEY_POINTS);
    store.remove(KEY_LEVEL);
    store.remove(KEY_CLICKS);
}

fn to_stored(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_stored(value: Option<i64>, default: u64) -> u64 {
    match value {
        Some(v) => u64::try_from(v).unwrap_or_else(|_| {
            log::warn!("Negative saved value {} clamped to 0", v);
            0
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let state = GameState { points: 42, level: 7, total_clicks: 900 };
        save_state(&mut store, &state);

        assert_eq!(store.get_int(KEY_POINTS), Some(42));
        assert_eq!(store.get_int(KEY_LEVEL), Some(7));
        assert_eq!(store.get_int(KEY_CLICKS), Some(900));
        assert_eq!(load_state(&store), Some(state));
    }

    #[test]
    fn test_missing_level_means_no_save() {
        let mut store = MemoryStore::new();
        store.set_int(KEY_POINTS, 10);
        assert_eq!(load_state(&store), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let mut store = MemoryStore::new();
        store.set_int(KEY_LEVEL, 3);
        assert_eq!(
            load_state(&store),
            Some(GameState { points: 0, level: 3, total_clicks: 0 })
        );
    }

    #[test]
    fn test_negative_values_clamp() {
        let mut store = MemoryStore::new();
        store.set_int(KEY_LEVEL, -4);
        store.set_int(KEY_POINTS, -100);
        let state = load_state(&store).unwrap();
        assert_eq!(state.points, 0);
        // Left for the model to clamp into range
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_clear_state() {
        let mut store = MemoryStore::new();
        save_state(&mut store, &GameState::default());
        clear_state(&mut store);
        assert!(store.is_empty());
        assert_eq!(load_state(&store), None);
    }
}
