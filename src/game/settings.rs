use crate::storage::{self, KeyValueStore};
use log::warn;
use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "enissa_settings";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_true")]
    pub sound_enabled: bool,

    /// Show countable fruit next to small sums in the math game.
    #[serde(default = "default_true")]
    pub math_visual_mode: bool,
}

// Helper functions for default values
fn default_version() -> u32 {
    2
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            sound_enabled: true,
            math_visual_mode: true,
        }
    }
}

impl Settings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(mut settings) = storage::load_json::<Settings>(store, SETTINGS_KEY) {
            settings.migrate();
            return settings;
        }
        let default = Settings::default();
        if let Err(err) = default.save(store) {
            warn!(target: "settings", "Could not store default settings: {}", err);
        }
        default
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> storage::Result<()> {
        storage::save_json(store, SETTINGS_KEY, self)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn migrate(&mut self) {
        if self.version < 2 {
            // version 1 had no visual mode toggle
            self.math_visual_mode = true;
            self.version = 2;
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    /// Fixed RNG seed for reproducible games, read from `SEED`.
    pub fn seed_from_env() -> Option<u64> {
        let raw = std::env::var("SEED").ok()?;
        match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!(target: "settings", "Ignoring SEED={:?}: {}", raw, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serial_test::serial;

    #[test]
    fn test_load_stores_defaults_on_first_run() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store);
        assert_eq!(settings, Settings::default());
        assert!(store.get(SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_old_version_is_migrated() {
        let store = MemoryStore::new();
        store
            .set(
                SETTINGS_KEY,
                r#"{"version":1,"sound_enabled":false,"math_visual_mode":false}"#,
            )
            .unwrap();

        let settings = Settings::load(&store);
        assert_eq!(settings.version(), 2);
        assert!(!settings.sound_enabled);
        assert!(settings.math_visual_mode);
    }

    #[test]
    fn test_save_round_trips_changes() {
        let store = MemoryStore::new();
        let mut settings = Settings::load(&store);
        settings.sound_enabled = false;
        settings.save(&store).unwrap();
        assert!(!Settings::load(&store).sound_enabled);
    }

    #[test]
    #[serial]
    fn test_seed_from_env() {
        std::env::set_var("SEED", "1234");
        assert_eq!(Settings::seed_from_env(), Some(1234));
        std::env::set_var("SEED", "not-a-number");
        assert_eq!(Settings::seed_from_env(), None);
        std::env::remove_var("SEED");
        assert_eq!(Settings::seed_from_env(), None);
    }
}
