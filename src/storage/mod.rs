//! Key-value persistence for the player profile, settings and statistics.

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("no user data directory available")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// String values under string keys, like a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes a JSON value. Unreadable or malformed entries count as
/// missing.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(target: "storage", "Could not read {}: {}", key, err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(target: "storage", "Ignoring malformed value under {}: {}", key, err);
            None
        }
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let contents = serde_json::to_string(value)?;
    store.set(key, &contents)
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        save_json(&store, "sample", &Sample { value: 9 }).unwrap();
        assert_eq!(load_json::<Sample>(&store, "sample"), Some(Sample { value: 9 }));
        assert_eq!(load_json::<Sample>(&store, "missing"), None);
    }

    #[test]
    fn test_malformed_json_counts_as_missing() {
        let store = MemoryStore::new();
        store.set("sample", "{not json").unwrap();
        assert_eq!(load_json::<Sample>(&store, "sample"), None);
    }

    #[test]
    fn test_key_validation() {
        assert!(validate_key("enissa_stats_math").is_ok());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
    }
}
