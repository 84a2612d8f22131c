use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifies one mini-game. The key doubles as the route segment and as the
/// suffix of the game's statistics key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Math,
    Draw,
    Memory,
    Sequence,
    Focus,
    Puzzle,
    Reading,
    Christmas,
    ToothBrushing,
    Animals,
}

impl GameId {
    pub fn all() -> Vec<GameId> {
        vec![
            GameId::Math,
            GameId::Draw,
            GameId::Memory,
            GameId::Sequence,
            GameId::Focus,
            GameId::Puzzle,
            GameId::Reading,
            GameId::Christmas,
            GameId::ToothBrushing,
            GameId::Animals,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            GameId::Math => "math",
            GameId::Draw => "draw",
            GameId::Memory => "memory",
            GameId::Sequence => "sequence",
            GameId::Focus => "focus",
            GameId::Puzzle => "puzzle",
            GameId::Reading => "reading",
            GameId::Christmas => "christmas",
            GameId::ToothBrushing => "toothbrushing",
            GameId::Animals => "animals",
        }
    }

    pub fn from_key(key: &str) -> Option<GameId> {
        GameId::all().into_iter().find(|game| game.key() == key)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.key())
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameId::Math => "Mathe-Spiele",
            GameId::Draw => "Malen & Zeichnen",
            GameId::Memory => "Gedächtnisspiel",
            GameId::Sequence => "Sequenz-Spiel",
            GameId::Focus => "Fokus-Training",
            GameId::Puzzle => "IQ-Puzzle",
            GameId::Reading => "Lesen lernen",
            GameId::Christmas => "Weihnachten",
            GameId::ToothBrushing => "Zähneputzen",
            GameId::Animals => "Tiere der Welt",
        }
    }

    /// Free-play games never finish and therefore never produce statistics.
    pub fn is_scored(&self) -> bool {
        !matches!(self, GameId::Draw | GameId::Christmas)
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_lookup() {
        for game in GameId::all() {
            assert_eq!(GameId::from_key(game.key()), Some(game));
        }
        assert_eq!(GameId::from_key("chess"), None);
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&GameId::ToothBrushing).unwrap();
        assert_eq!(json, "\"toothbrushing\"");
    }

    #[test]
    fn test_free_play_games_are_unscored() {
        let unscored: Vec<GameId> = GameId::all()
            .into_iter()
            .filter(|g| !g.is_scored())
            .collect();
        assert_eq!(unscored, vec![GameId::Draw, GameId::Christmas]);
    }
}
