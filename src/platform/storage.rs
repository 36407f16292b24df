//! LocalStorage-backed key-value store (WASM only)

use web_sys::Storage;

use crate::persistence::KeyValueStore;

/// Integer fields stored as strings under a key prefix
pub struct LocalStorageStore {
    storage: Option<Storage>,
    prefix: &'static str,
}

impl LocalStorageStore {
    pub fn new(prefix: &'static str) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - progress will not persist");
        }
        Self { storage, prefix }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new("brick_clicker.")
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        let storage = self.storage.as_ref()?;
        let raw = storage.get_item(&self.key(key)).ok()??;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring non-integer value for {}: {:?}", key, raw);
                None
            }
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(&self.key(key), &value.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(&self.key(key));
        }
    }
}
