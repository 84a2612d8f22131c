use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Leicht",
            Difficulty::Medium => "Mittel",
            Difficulty::Hard => "Schwer",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Difficulty::Easy => "😊",
            Difficulty::Medium => "🤔",
            Difficulty::Hard => "🤓",
        }
    }
}
