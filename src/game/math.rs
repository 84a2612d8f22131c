use super::seeded_rng;
use crate::content::math::{VisualItem, VISUAL_ITEMS};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{Difficulty, GameEvent, GameId, GamePhase, Notification, Rating};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::BTreeSet;
use std::time::Duration;

pub const TOTAL_QUESTIONS: usize = 10;
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(2000);
const ANSWER_OPTIONS: usize = 4;
const VISUAL_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    fn available(difficulty: Difficulty) -> &'static [Operation] {
        match difficulty {
            Difficulty::Easy => &[Operation::Add, Operation::Subtract],
            Difficulty::Medium => &[Operation::Add, Operation::Subtract, Operation::Multiply],
            Difficulty::Hard => &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
        }
    }

    fn apply(&self, left: u32, right: u32) -> u32 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
            Operation::Divide => left / right,
        }
    }
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathQuestion {
    pub left: u32,
    pub right: u32,
    pub operation: Operation,
    pub answer: u32,
    pub options: Vec<u32>,
}

impl MathQuestion {
    pub fn generate(difficulty: Difficulty, rng: &mut StdRng) -> Self {
        let (low, high) = match difficulty {
            Difficulty::Easy => (1, 10),
            Difficulty::Medium => (10, 49),
            Difficulty::Hard => (50, 99),
        };
        let mut left = rng.random_range(low..=high);
        let mut right = rng.random_range(low..=high);
        let operation = *Operation::available(difficulty)
            .choose(rng)
            .unwrap_or(&Operation::Add);

        match operation {
            Operation::Subtract if left < right => std::mem::swap(&mut left, &mut right),
            Operation::Multiply => {
                let max = if difficulty == Difficulty::Hard { 12 } else { 10 };
                left = rng.random_range(1..=max);
                right = rng.random_range(1..=max);
            }
            Operation::Divide => {
                right = rng.random_range(2..=11);
                left = right * rng.random_range(1..=20);
            }
            _ => {}
        }

        let answer = operation.apply(left, right);
        let options = Self::answer_options(answer, rng);
        trace!(target: "math", "Generated {} {} {} = {}", left, operation.symbol(), right, answer);
        Self {
            left,
            right,
            operation,
            answer,
            options,
        }
    }

    fn answer_options(answer: u32, rng: &mut StdRng) -> Vec<u32> {
        let mut options = BTreeSet::from([answer]);
        while options.len() < ANSWER_OPTIONS {
            let offset: i64 = rng.random_range(-5..=4);
            let candidate = answer as i64 + offset;
            if offset != 0 && candidate >= 0 {
                options.insert(candidate as u32);
            }
        }
        let mut options: Vec<u32> = options.into_iter().collect();
        options.shuffle(rng);
        options
    }

    /// Small enough to count on fingers (or fruit).
    pub fn is_countable(&self) -> bool {
        self.left <= VISUAL_LIMIT && self.right <= VISUAL_LIMIT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathCommand {
    Start(Difficulty),
    Answer(u32),
    Continue,
    BackToMenu,
}

pub fn rating(score: u32) -> Rating {
    match score {
        8.. => Rating::new("🏆", "Fantastisch! 🎉"),
        5.. => Rating::new("🌟", "Gut gemacht! 👏"),
        _ => Rating::new("👍", "Weiter üben! 💪"),
    }
}

pub struct MathGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    difficulty: Difficulty,
    question: Option<MathQuestion>,
    visual_item: Option<VisualItem>,
    visual_mode: bool,
    question_number: usize,
    score: u32,
    streak: u32,
    max_streak: u32,
    selected_answer: Option<u32>,
}

impl MathGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>, visual_mode: bool) -> Self {
        Self {
            emitter,
            rng: seeded_rng("math", seed),
            phase: GamePhase::Menu,
            difficulty: Difficulty::default(),
            question: None,
            visual_item: None,
            visual_mode,
            question_number: 0,
            score: 0,
            streak: 0,
            max_streak: 0,
            selected_answer: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question(&self) -> Option<&MathQuestion> {
        self.question.as_ref()
    }

    /// Only set for countable questions while visual mode is on.
    pub fn visual_item(&self) -> Option<&VisualItem> {
        self.visual_item.as_ref()
    }

    pub fn question_number(&self) -> usize {
        self.question_number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn selected_answer(&self) -> Option<u32> {
        self.selected_answer
    }

    pub fn is_showing_feedback(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn progress(&self) -> f64 {
        self.question_number as f64 / TOTAL_QUESTIONS as f64
    }

    pub fn set_visual_mode(&mut self, visual_mode: bool) {
        self.visual_mode = visual_mode;
        self.pick_visual_item();
        self.emitter.emit(GameEvent::Updated(GameId::Math));
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Math,
            phase,
        });
    }

    fn next_question(&mut self) {
        self.question = Some(MathQuestion::generate(self.difficulty, &mut self.rng));
        self.pick_visual_item();
    }

    fn pick_visual_item(&mut self) {
        self.visual_item = match &self.question {
            Some(question) if self.visual_mode && question.is_countable() => {
                VISUAL_ITEMS.choose(&mut self.rng).copied()
            }
            _ => None,
        };
    }

    fn start(&mut self, difficulty: Difficulty) {
        debug!(target: "math", "Starting {:?} round", difficulty);
        self.difficulty = difficulty;
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.selected_answer = None;
        self.question_number = 1;
        self.next_question();
        self.set_phase(GamePhase::Playing);
    }

    fn answer(&mut self, answer: u32) {
        if self.phase != GamePhase::Playing || self.selected_answer.is_some() {
            debug!(target: "math", "Ignoring answer {} while {:?}", answer, self.phase);
            return;
        }
        let Some(question) = &self.question else {
            return;
        };
        let correct = question.answer;
        self.selected_answer = Some(answer);

        let notification = if answer == correct {
            self.score += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            let description = if self.streak > 2 {
                format!("{} in Folge! 🔥", self.streak)
            } else {
                "Weiter so!".to_string()
            };
            Notification::success("Richtig! 🎉").with_description(description)
        } else {
            self.streak = 0;
            Notification::error("Nicht ganz richtig 😊")
                .with_description(format!("Die richtige Antwort war {}", correct))
        };
        self.emitter.emit(GameEvent::Notify(notification));
        self.emitter.emit(GameEvent::Updated(GameId::Math));
    }

    fn advance(&mut self) {
        if self.phase != GamePhase::Playing || self.selected_answer.is_none() {
            return;
        }
        self.selected_answer = None;
        if self.question_number < TOTAL_QUESTIONS {
            self.question_number += 1;
            self.next_question();
            self.emitter.emit(GameEvent::Updated(GameId::Math));
        } else {
            self.set_phase(GamePhase::Finished);
            self.emitter.emit(GameEvent::Completed {
                game: GameId::Math,
                score: self.score,
            });
        }
    }
}

impl EventHandler<MathCommand> for MathGame {
    fn handle_event(&mut self, event: &MathCommand) {
        match event {
            MathCommand::Start(difficulty) => self.start(*difficulty),
            MathCommand::Answer(answer) => self.answer(*answer),
            MathCommand::Continue => self.advance(),
            MathCommand::BackToMenu => {
                self.question = None;
                self.selected_answer = None;
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
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use test_context::test_context;

    fn game(seed: u64) -> (MathGame, Rc<RefCell<Vec<GameEvent>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        observer.subscribe(move |event| events_clone.borrow_mut().push(event.clone()));
        (MathGame::new(emitter, Some(seed), true), events)
    }

    #[test]
    fn test_answer_options_are_distinct_and_non_negative() {
        for difficulty in Difficulty::all() {
            let mut rng = StdRng::seed_from_u64(7);
            for _ in 0..200 {
                let question = MathQuestion::generate(difficulty, &mut rng);
                let mut options = question.options.clone();
                assert!(options.contains(&question.answer));
                options.sort();
                options.dedup();
                assert_eq!(options.len(), 4);
            }
        }
    }

    #[test]
    fn test_question_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let question = MathQuestion::generate(Difficulty::Easy, &mut rng);
            assert!(matches!(question.operation, Operation::Add | Operation::Subtract));
            assert!((1..=10).contains(&question.left) && (1..=10).contains(&question.right));
            assert!(question.left >= question.right || question.operation == Operation::Add);

            let question = MathQuestion::generate(Difficulty::Hard, &mut rng);
            match question.operation {
                Operation::Divide => {
                    assert!((2..=11).contains(&question.right));
                    assert_eq!(question.left % question.right, 0);
                    assert!((1..=20).contains(&question.answer));
                }
                Operation::Multiply => {
                    assert!(question.left <= 12 && question.right <= 12);
                }
                _ => assert!(question.left >= 50 && question.right >= 50),
            }
        }
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_full_round_finishes_with_score(_: &mut UsingLogger) {
        let (mut game, events) = game(3);
        game.handle_event(&MathCommand::Start(Difficulty::Medium));
        assert_eq!(game.phase(), GamePhase::Playing);

        for i in 0..TOTAL_QUESTIONS {
            let answer = game.question().unwrap().answer;
            let answer = if i % 2 == 0 { answer } else { answer + 100 };
            game.handle_event(&MathCommand::Answer(answer));
            game.handle_event(&MathCommand::Continue);
        }

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.score(), 5);
        assert!(events.borrow().contains(&GameEvent::Completed {
            game: GameId::Math,
            score: 5
        }));
    }

    #[test]
    fn test_second_answer_ignored_during_feedback() {
        let (mut game, _) = game(11);
        game.handle_event(&MathCommand::Start(Difficulty::Easy));
        let answer = game.question().unwrap().answer;
        game.handle_event(&MathCommand::Answer(answer));
        game.handle_event(&MathCommand::Answer(answer));
        assert_eq!(game.score(), 1);
        assert_eq!(game.question_number(), 1);
    }

    #[test]
    fn test_streak_notification() {
        let (mut game, events) = game(5);
        game.handle_event(&MathCommand::Start(Difficulty::Easy));
        for _ in 0..3 {
            let answer = game.question().unwrap().answer;
            game.handle_event(&MathCommand::Answer(answer));
            game.handle_event(&MathCommand::Continue);
        }
        assert_eq!(game.max_streak(), 3);
        let streak_notified = events.borrow().iter().any(|event| match event {
            GameEvent::Notify(notification) => {
                notification.description.as_deref() == Some("3 in Folge! 🔥")
            }
            _ => false,
        });
        assert!(streak_notified);

        let wrong = game.question().unwrap().answer + 1;
        game.handle_event(&MathCommand::Answer(wrong));
        assert_eq!(game.streak(), 0);
        assert_eq!(game.max_streak(), 3);
    }

    #[test]
    fn test_visual_item_only_for_countable_questions() {
        let (mut game, _) = game(9);
        game.handle_event(&MathCommand::Start(Difficulty::Easy));
        assert!(game.visual_item().is_some());

        game.set_visual_mode(false);
        assert!(game.visual_item().is_none());
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating(10).emoji, "🏆");
        assert_eq!(rating(8).emoji, "🏆");
        assert_eq!(rating(5).emoji, "🌟");
        assert_eq!(rating(4).emoji, "👍");
    }
}
