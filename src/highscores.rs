//! Best score, persisted through the key-value store
//!
//! Stored as a plain decimal string. Anything unreadable counts as zero.

use crate::platform::storage::KeyValueStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flappyBestScore";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    /// Decode a stored value; missing or malformed input yields 0
    pub fn parse(raw: Option<&str>) -> u32 {
        let Some(raw) = raw else {
            return 0;
        };
        match raw.trim().parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring unreadable best score {:?}", raw);
                0
            }
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = store.get(Self::STORAGE_KEY);
        Self::new(Self::parse(raw.as_deref()))
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(Self::STORAGE_KEY, &self.value.to_string());
    }

    /// Take `score` if it beats the current best. Returns true when updated.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }
}
