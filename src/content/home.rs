use crate::model::GameId;

pub const APP_TITLE: &str = "ENISSA";
pub const APP_TAGLINE: &str = "Deine Lern- und Spiel-App!";
pub const HOME_FOOTER: &str = "Viel Spaß beim Lernen und Spielen! 🎉";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCard {
    pub game: GameId,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub static GAME_CARDS: [GameCard; 10] = [
    GameCard { game: GameId::Math, emoji: "🧮", description: "Lerne Mathematik mit Spaß!" },
    GameCard { game: GameId::Draw, emoji: "🎨", description: "Werde kreativ mit Farben!" },
    GameCard { game: GameId::Memory, emoji: "🧠", description: "Finde alle passenden Paare!" },
    GameCard { game: GameId::Sequence, emoji: "🎵", description: "Merke dir die Reihenfolge!" },
    GameCard { game: GameId::Focus, emoji: "🎯", description: "Klicke so schnell wie möglich!" },
    GameCard { game: GameId::Puzzle, emoji: "🧩", description: "Schiebe die Kacheln in Ordnung!" },
    GameCard { game: GameId::Reading, emoji: "📖", description: "Lies Geschichten und beantworte Fragen!" },
    GameCard { game: GameId::Christmas, emoji: "🎄", description: "Dekoriere dein Weihnachtszimmer!" },
    GameCard { game: GameId::ToothBrushing, emoji: "🦷", description: "Lerne richtig Zähne zu putzen!" },
    GameCard { game: GameId::Animals, emoji: "🦁", description: "Lerne Tiere und ihre Herkunft kennen!" },
];

pub const ABOUT_TITLE: &str = "Über ENISSA";
pub const ABOUT_HEADLINE: &str = "Für jedes Kind, das lernen und wachsen möchte 🌱";
pub const ABOUT_TEXT: &str = "ENISSA wurde mit viel Liebe entwickelt, um Kindern dabei zu helfen, ihre \
Konzentration zu verbessern und in der Schule erfolgreicher zu sein. Jedes Spiel wurde sorgfältig \
gestaltet, um nicht nur Spaß zu machen, sondern auch echte Lernfortschritte zu ermöglichen.";

pub static ABOUT_FEATURES: [&str; 4] = [
    "Spiele die speziell entwickelt wurden, um die Aufmerksamkeitsspanne zu verlängern.",
    "Verbessere dein Kurz- und Langzeitgedächtnis mit unterhaltsamen Übungen.",
    "Alle Spiele unterstützen Fähigkeiten, die für den Schulerfolg wichtig sind.",
    "Entfalte deine kreative Seite mit Mal- und Zeichenfunktionen.",
];

pub const ABOUT_QUOTE: &str = "\"Lernen sollte Freude machen, nicht Stress verursachen.\"";
pub const ABOUT_FOOTER: &str = "Mit ❤️ für alle Kinder gemacht";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_game() {
        let games: Vec<GameId> = GAME_CARDS.iter().map(|card| card.game).collect();
        assert_eq!(games, GameId::all());
    }
}
