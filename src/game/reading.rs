use super::seeded_rng;
use crate::content::reading::{stories_for_grade, ReadingQuestion, Story};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, GamePhase, Notification, Rating};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

pub const FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingCommand {
    Start(u8),
    Answer(usize),
    Continue,
    BackToMenu,
}

pub fn rating(score: usize, total: usize) -> Rating {
    if score == total {
        Rating::new("🏆", "Perfekt! Du hast alles verstanden! 🌟")
    } else if score * 10 >= total * 7 {
        Rating::new("⭐", "Sehr gut! Weiter so! 👏")
    } else {
        Rating::new("📚", "Übe weiter! Du schaffst das! 💪")
    }
}

pub struct ReadingGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    grade: u8,
    story: Option<&'static Story>,
    question_index: usize,
    score: usize,
    selected_answer: Option<usize>,
}

impl ReadingGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("reading", seed),
            phase: GamePhase::Menu,
            grade: 1,
            story: None,
            question_index: 0,
            score: 0,
            selected_answer: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grade(&self) -> u8 {
        self.grade
    }

    pub fn story(&self) -> Option<&'static Story> {
        self.story
    }

    pub fn question(&self) -> Option<&'static ReadingQuestion> {
        self.story
            .and_then(|story| story.questions.get(self.question_index))
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn total_questions(&self) -> usize {
        self.story.map_or(0, |story| story.questions.len())
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Reading,
            phase,
        });
    }

    fn start(&mut self, grade: u8) {
        let Some(story) = stories_for_grade(grade).choose(&mut self.rng).copied() else {
            debug!(target: "reading", "No stories for grade {}", grade);
            return;
        };
        info!(target: "reading", "Grade {}: {}", grade, story.title);
        self.grade = grade;
        self.story = Some(story);
        self.question_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.set_phase(GamePhase::Playing);
    }

    fn answer(&mut self, index: usize) {
        if self.phase != GamePhase::Playing || self.selected_answer.is_some() {
            debug!(target: "reading", "Ignoring answer {} while {:?}", index, self.phase);
            return;
        }
        let Some(question) = self.question() else {
            return;
        };
        self.selected_answer = Some(index);
        let notification = if index == question.correct {
            self.score += 1;
            Notification::success("Richtig! Super gelesen! 📖✨")
        } else {
            Notification::error("Nicht ganz richtig. Lies nochmal genau! 🤔")
        };
        self.emitter.emit(GameEvent::Notify(notification));
        self.emitter.emit(GameEvent::Updated(GameId::Reading));
    }

    fn advance(&mut self) {
        if self.phase != GamePhase::Playing || self.selected_answer.take().is_none() {
            return;
        }
        if self.question_index + 1 < self.total_questions() {
            self.question_index += 1;
            self.emitter.emit(GameEvent::Updated(GameId::Reading));
        } else {
            self.set_phase(GamePhase::Finished);
            self.emitter.emit(GameEvent::Completed {
                game: GameId::Reading,
                score: self.score as u32,
            });
        }
    }
}

impl EventHandler<ReadingCommand> for ReadingGame {
    fn handle_event(&mut self, event: &ReadingCommand) {
        match event {
            ReadingCommand::Start(grade) => self.start(*grade),
            ReadingCommand::Answer(index) => self.answer(*index),
            ReadingCommand::Continue => self.advance(),
            ReadingCommand::BackToMenu => {
                self.story = None;
                self.selected_answer = None;
                self.set_phase(GamePhase::Menu);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reading::GRADES;
    use crate::events::Channel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn game() -> (ReadingGame, Rc<RefCell<Vec<GameEvent>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        observer.subscribe(move |event| events_clone.borrow_mut().push(event.clone()));
        (ReadingGame::new(emitter, Some(1)), events)
    }

    #[test]
    fn test_every_grade_finishes_with_bounded_score() {
        for grade in GRADES.iter() {
            let (mut game, events) = game();
            game.handle_event(&ReadingCommand::Start(grade.id));
            assert_eq!(game.story().unwrap().grade, grade.id);

            let total = game.total_questions();
            for _ in 0..total {
                let correct = game.question().unwrap().correct;
                game.handle_event(&ReadingCommand::Answer(correct));
                game.handle_event(&ReadingCommand::Continue);
            }

            assert_eq!(game.phase(), GamePhase::Finished);
            assert_eq!(game.score(), total);
            assert_eq!(
                events.borrow().last(),
                Some(&GameEvent::Completed {
                    game: GameId::Reading,
                    score: total as u32
                })
            );
        }
    }

    #[test]
    fn test_continue_without_answer_is_ignored() {
        let (mut game, _) = game();
        game.handle_event(&ReadingCommand::Start(2));
        game.handle_event(&ReadingCommand::Continue);
        assert_eq!(game.question_index(), 0);
    }

    #[test]
    fn test_unknown_grade_stays_in_menu() {
        let (mut game, _) = game();
        game.handle_event(&ReadingCommand::Start(9));
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_rating() {
        assert_eq!(rating(3, 3).emoji, "🏆");
        assert_eq!(rating(7, 10).emoji, "⭐");
        assert_eq!(rating(2, 3).emoji, "📚");
    }
}
