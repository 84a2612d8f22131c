use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 20;

/// Shown wherever a name is needed but none has been chosen yet.
pub const DEFAULT_PLAYER_NAME: &str = "Spieler";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Dein Name muss mindestens 2 Buchstaben haben! 📝")]
    TooShort,
    #[error("Dein Name ist zu lang! Maximal 20 Buchstaben. ✂️")]
    TooLong,
}

/// A trimmed display name of 2 to 20 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let name = raw.trim();
        let chars = name.chars().count();
        if chars < MIN_NAME_CHARS {
            return Err(NameError::TooShort);
        }
        if chars > MAX_NAME_CHARS {
            return Err(NameError::TooLong);
        }
        Ok(PlayerName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerName::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_character_name_is_rejected() {
        assert_eq!(PlayerName::parse("A"), Err(NameError::TooShort));
        assert_eq!(PlayerName::parse("   B  "), Err(NameError::TooShort));
        assert_eq!(PlayerName::parse(""), Err(NameError::TooShort));
    }

    #[test]
    fn test_name_longer_than_twenty_is_rejected() {
        let long = "a".repeat(21);
        assert_eq!(PlayerName::parse(&long), Err(NameError::TooLong));
    }

    #[test]
    fn test_bounds_are_inclusive_and_trimmed() {
        assert_eq!(PlayerName::parse(" Jo ").unwrap().as_str(), "Jo");
        let twenty = "b".repeat(20);
        assert_eq!(PlayerName::parse(&twenty).unwrap().as_str(), twenty);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 umlauts are 40 bytes
        let umlauts = "ä".repeat(20);
        assert!(PlayerName::parse(&umlauts).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<PlayerName>("\"x\"").is_err());
        let name: PlayerName = serde_json::from_str("\"Enissa\"").unwrap();
        assert_eq!(name.to_string(), "Enissa");
    }
}
