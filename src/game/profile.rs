use crate::model::{NameError, PlayerName, DEFAULT_PLAYER_NAME};
use crate::storage::{KeyValueStore, StorageError};
use log::{info, warn};
use std::rc::Rc;
use thiserror::Error;

pub const PLAYER_NAME_KEY: &str = "enissa_player_name";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("could not store the name: {0}")]
    Storage(#[from] StorageError),
}

/// The player's display name. The name is stored as plain text, not JSON.
pub struct PlayerProfile {
    store: Rc<dyn KeyValueStore>,
    name: Option<PlayerName>,
}

impl PlayerProfile {
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let name = match store.get(PLAYER_NAME_KEY) {
            Ok(Some(raw)) => match PlayerName::parse(&raw) {
                Ok(name) => Some(name),
                Err(err) => {
                    warn!(target: "profile", "Ignoring stored name {:?}: {}", raw, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(target: "profile", "Could not read player name: {}", err);
                None
            }
        };
        Self { store, name }
    }

    /// True on first visit, before any name was saved.
    pub fn needs_name(&self) -> bool {
        self.name.is_none()
    }

    pub fn name(&self) -> Option<&PlayerName> {
        self.name.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .map(PlayerName::as_str)
            .unwrap_or(DEFAULT_PLAYER_NAME)
    }

    /// Validates, persists and adopts a new name. On error the previous name
    /// stays in place.
    pub fn set_name(&mut self, raw: &str) -> Result<&PlayerName, ProfileError> {
        let name = PlayerName::parse(raw)?;
        self.store.set(PLAYER_NAME_KEY, name.as_str())?;
        info!(target: "profile", "Player name set to {}", name);
        Ok(self.name.insert(name))
    }

    pub fn welcome_message(name: &PlayerName) -> String {
        format!("Willkommen, {name}! 🎉")
    }
}

/// Prefixes a sentence with the player's name, lower-casing its first letter:
/// `"Wähle ..."` becomes `"Mia, wähle ..."`.
pub fn address_player(name: Option<&PlayerName>, sentence: &str) -> String {
    match name {
        Some(name) => {
            let mut chars = sentence.chars();
            let rest = match chars.next() {
                Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("{name}, {rest}")
        }
        None => sentence.to_string(),
    }
}

/// Appends `", Name"` to an exclamation when a name is known.
pub fn cheer_player(name: Option<&PlayerName>, exclamation: &str) -> String {
    match name {
        Some(name) => format!("{exclamation}, {name}!"),
        None => format!("{exclamation}!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn empty_profile() -> (Rc<MemoryStore>, PlayerProfile) {
        let store = Rc::new(MemoryStore::new());
        let profile = PlayerProfile::load(store.clone());
        (store, profile)
    }

    #[test]
    fn test_first_visit_needs_a_name() {
        let (_, profile) = empty_profile();
        assert!(profile.needs_name());
        assert_eq!(profile.display_name(), "Spieler");
    }

    #[test]
    fn test_short_name_is_rejected_and_nothing_is_stored() {
        let (store, mut profile) = empty_profile();
        let err = profile.set_name("A").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidName(NameError::TooShort)));
        assert!(profile.needs_name());
        assert_eq!(store.get(PLAYER_NAME_KEY).unwrap(), None);
    }

    #[test]
    fn test_valid_name_is_persisted() {
        let (store, mut profile) = empty_profile();
        profile.set_name("  Enissa ").unwrap();
        assert_eq!(profile.display_name(), "Enissa");

        let reloaded = PlayerProfile::load(store);
        assert_eq!(reloaded.name().map(PlayerName::as_str), Some("Enissa"));
    }

    #[test]
    fn test_failed_rename_keeps_previous_name() {
        let (_, mut profile) = empty_profile();
        profile.set_name("Mia").unwrap();
        assert!(profile.set_name(&"x".repeat(25)).is_err());
        assert_eq!(profile.display_name(), "Mia");
    }

    #[test]
    fn test_invalid_stored_name_is_ignored() {
        let store = Rc::new(MemoryStore::new());
        store.set(PLAYER_NAME_KEY, "Z").unwrap();
        assert!(PlayerProfile::load(store).needs_name());
    }

    #[test]
    fn test_address_player() {
        let mia = PlayerName::parse("Mia").unwrap();
        assert_eq!(
            address_player(Some(&mia), "Wähle deine Klassenstufe!"),
            "Mia, wähle deine Klassenstufe!"
        );
        assert_eq!(
            address_player(None, "Wähle deine Klassenstufe!"),
            "Wähle deine Klassenstufe!"
        );
        assert_eq!(cheer_player(Some(&mia), "Super geputzt"), "Super geputzt, Mia!");
        assert_eq!(cheer_player(None, "Super"), "Super!");
    }
}
