use super::seeded_rng;
use crate::content::memory::CARD_EMOJIS;
use crate::events::{EventEmitter, EventHandler};
use crate::model::{Difficulty, GameEvent, GameId, GamePhase, Notification, Rating};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;

pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MATCH_NOTIFICATION_DURATION: Duration = Duration::from_millis(1000);

pub fn pair_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 6,
        Difficulty::Medium => 8,
        Difficulty::Hard => 12,
    }
}

pub fn columns(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => 4,
        Difficulty::Hard => 6,
    }
}

pub fn rating(moves: u32, cards: usize) -> Rating {
    let moves = moves as usize;
    if moves < cards {
        Rating::new("🏆", "Perfekt! Ausgezeichnetes Gedächtnis! 🌟")
    } else if moves * 2 < cards * 3 {
        Rating::new("⭐", "Sehr gut gemacht! 👏")
    } else {
        Rating::new("👍", "Gut! Weiter üben! 💪")
    }
}

/// 100 means every pair was found on its first try.
pub fn score(pairs: usize, moves: u32) -> u32 {
    if moves == 0 {
        return 0;
    }
    (pairs as u32 * 100) / moves
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCard {
    pub emoji: &'static str,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryCommand {
    Start(Difficulty),
    Flip(usize),
    ConcealMismatch,
    Tick,
    BackToMenu,
}

pub struct MemoryGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    difficulty: Difficulty,
    cards: Vec<MemoryCard>,
    flipped: Vec<usize>,
    moves: u32,
    elapsed_secs: u32,
}

impl MemoryGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("memory", seed),
            phase: GamePhase::Menu,
            difficulty: Difficulty::default(),
            cards: Vec::new(),
            flipped: Vec::new(),
            moves: 0,
            elapsed_secs: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.cards.get(index).is_some_and(|card| card.matched)
    }

    /// Two unmatched cards are face up and waiting for `ConcealMismatch`.
    pub fn is_checking(&self) -> bool {
        self.flipped.len() == 2
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Memory,
            phase,
        });
    }

    fn deal(&mut self, difficulty: Difficulty) -> Vec<MemoryCard> {
        let mut pool = CARD_EMOJIS.to_vec();
        pool.shuffle(&mut self.rng);
        pool.truncate(pair_count(difficulty));

        let mut cards: Vec<MemoryCard> = pool
            .iter()
            .chain(pool.iter())
            .map(|&emoji| MemoryCard {
                emoji,
                matched: false,
            })
            .collect();
        cards.shuffle(&mut self.rng);
        cards
    }

    fn start(&mut self, difficulty: Difficulty) {
        debug!(target: "memory", "Starting {:?} board", difficulty);
        self.difficulty = difficulty;
        self.cards = self.deal(difficulty);
        self.flipped.clear();
        self.moves = 0;
        self.elapsed_secs = 0;
        self.set_phase(GamePhase::Playing);
    }

    fn flip(&mut self, index: usize) {
        if self.phase != GamePhase::Playing || self.is_checking() {
            return;
        }
        let Some(card) = self.cards.get(index) else {
            return;
        };
        if card.matched || self.flipped.contains(&index) {
            trace!(target: "memory", "Card {} already face up", index);
            return;
        }

        self.flipped.push(index);
        if self.is_checking() {
            let (first, second) = (self.flipped[0], self.flipped[1]);
            self.moves += 1;
            if self.cards[first].emoji == self.cards[second].emoji {
                self.cards[first].matched = true;
                self.cards[second].matched = true;
                self.flipped.clear();
                self.emitter.emit(GameEvent::Notify(
                    Notification::success("Gut gemacht! 🌟")
                        .with_duration(MATCH_NOTIFICATION_DURATION),
                ));
            }
        }
        self.emitter.emit(GameEvent::Updated(GameId::Memory));

        if self.matched_pairs() == pair_count(self.difficulty) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.set_phase(GamePhase::Finished);
        self.emitter.emit(GameEvent::Notify(Notification::success(
            "Fantastisch! Alle Paare gefunden! 🎉",
        )));
        self.emitter.emit(GameEvent::Completed {
            game: GameId::Memory,
            score: score(self.matched_pairs(), self.moves),
        });
    }

    fn conceal_mismatch(&mut self) {
        if !self.is_checking() {
            return;
        }
        self.flipped.clear();
        self.emitter.emit(GameEvent::Updated(GameId::Memory));
    }
}

impl EventHandler<MemoryCommand> for MemoryGame {
    fn handle_event(&mut self, event: &MemoryCommand) {
        match event {
            MemoryCommand::Start(difficulty) => self.start(*difficulty),
            MemoryCommand::Flip(index) => self.flip(*index),
            MemoryCommand::ConcealMismatch => self.conceal_mismatch(),
            MemoryCommand::Tick => {
                if self.phase == GamePhase::Playing {
                    self.elapsed_secs += 1;
                    self.emitter.emit(GameEvent::Updated(GameId::Memory));
                }
            }
            MemoryCommand::BackToMenu => {
                self.cards.clear();
                self.flipped.clear();
                self.set_phase(GamePhase::Menu);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use crate::game::tests::UsingLogger;
    use std::collections::HashMap;
    use test_context::test_context;

    fn game() -> MemoryGame {
        let (emitter, _observer) = Channel::<GameEvent>::new();
        MemoryGame::new(emitter, Some(21))
    }

    fn partner_of(game: &MemoryGame, index: usize) -> usize {
        let emoji = game.cards()[index].emoji;
        (0..game.cards().len())
            .find(|&other| other != index && game.cards()[other].emoji == emoji)
            .unwrap()
    }

    #[test]
    fn test_deck_contains_each_emoji_twice() {
        for difficulty in Difficulty::all() {
            let mut game = game();
            game.handle_event(&MemoryCommand::Start(difficulty));
            assert_eq!(game.cards().len(), pair_count(difficulty) * 2);

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for card in game.cards() {
                *counts.entry(card.emoji).or_default() += 1;
            }
            assert_eq!(counts.len(), pair_count(difficulty));
            assert!(counts.values().all(|&count| count == 2));
        }
    }

    #[test]
    fn test_mismatch_blocks_until_concealed() {
        let mut game = game();
        game.handle_event(&MemoryCommand::Start(Difficulty::Easy));
        let other = (1..game.cards().len())
            .find(|&i| game.cards()[i].emoji != game.cards()[0].emoji)
            .unwrap();

        game.handle_event(&MemoryCommand::Flip(0));
        game.handle_event(&MemoryCommand::Flip(other));
        assert!(game.is_checking());
        assert_eq!(game.moves(), 1);

        let third = partner_of(&game, 0);
        game.handle_event(&MemoryCommand::Flip(third));
        assert!(!game.is_face_up(third));

        game.handle_event(&MemoryCommand::ConcealMismatch);
        assert!(!game.is_face_up(0));
        assert!(!game.is_face_up(other));
    }

    #[test]
    fn test_flipping_same_card_twice_is_ignored() {
        let mut game = game();
        game.handle_event(&MemoryCommand::Start(Difficulty::Easy));
        game.handle_event(&MemoryCommand::Flip(0));
        game.handle_event(&MemoryCommand::Flip(0));
        assert_eq!(game.moves(), 0);
        assert!(!game.is_checking());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_perfect_game_finishes_with_full_score(_: &mut UsingLogger) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let completed = std::rc::Rc::new(std::cell::Cell::new(None));
        let completed_clone = completed.clone();
        observer.subscribe(move |event| {
            if let GameEvent::Completed { score, .. } = event {
                completed_clone.set(Some(*score));
            }
        });
        let mut game = MemoryGame::new(emitter, Some(4));
        game.handle_event(&MemoryCommand::Start(Difficulty::Medium));
        game.handle_event(&MemoryCommand::Tick);

        while let Some(index) = (0..game.cards().len()).find(|&i| !game.cards()[i].matched) {
            let partner = partner_of(&game, index);
            game.handle_event(&MemoryCommand::Flip(index));
            game.handle_event(&MemoryCommand::Flip(partner));
        }

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.moves(), 8);
        assert_eq!(game.elapsed_secs(), 1);
        assert_eq!(completed.get(), Some(100));
        assert_eq!(rating(game.moves(), game.cards().len()).emoji, "🏆");
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating(12, 12).emoji, "⭐");
        assert_eq!(rating(17, 12).emoji, "⭐");
        assert_eq!(rating(18, 12).emoji, "👍");
        assert_eq!(score(6, 12), 50);
        assert_eq!(score(6, 0), 0);
    }
}
