use super::seeded_rng;
use crate::content::animals::{animals_of, Animal, Continent, ANIMALS, CONTINENTS};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, GamePhase, Notification, Rating};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

pub const FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

pub fn rating(score: u32) -> Rating {
    match score {
        5.. => Rating::new("🏆", "Du kennst dich super mit Tieren aus! 🎉"),
        3.. => Rating::new("⭐", "Gut gemacht! Übe weiter! 💪"),
        _ => Rating::new("🌟", "Probiere es nochmal! Du schaffst das! 🌟"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimalCommand {
    StartQuiz,
    Guess(usize),
    Continue,
    Explore,
    SelectContinent(usize),
    LearnAnimal(usize),
    BackToExplore,
    BackToMenu,
}

pub struct AnimalGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    animal: Option<&'static Animal>,
    continent: Option<&'static Continent>,
    score: u32,
    last_guess_correct: Option<bool>,
}

impl AnimalGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("animals", seed),
            phase: GamePhase::Menu,
            animal: None,
            continent: None,
            score: 0,
            last_guess_correct: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The quiz subject, or the animal on the learning card.
    pub fn animal(&self) -> Option<&'static Animal> {
        self.animal
    }

    pub fn selected_continent(&self) -> Option<&'static Continent> {
        self.continent
    }

    pub fn continent_animals(&self) -> Vec<&'static Animal> {
        self.continent
            .map(|continent| animals_of(continent.name).collect())
            .unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_showing_feedback(&self) -> bool {
        self.last_guess_correct.is_some()
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Animals,
            phase,
        });
    }

    fn next_animal(&mut self) {
        self.animal = ANIMALS.choose(&mut self.rng);
        debug!(target: "animals", "Quiz animal: {:?}", self.animal.map(|animal| animal.name));
    }

    fn start_quiz(&mut self) {
        self.score = 0;
        self.last_guess_correct = None;
        self.next_animal();
        self.set_phase(GamePhase::Playing);
    }

    fn guess(&mut self, continent: usize) {
        if self.phase != GamePhase::Playing || self.last_guess_correct.is_some() {
            return;
        }
        let (Some(animal), Some(guess)) = (self.animal, CONTINENTS.get(continent)) else {
            return;
        };

        let correct = guess.name == animal.continent;
        self.last_guess_correct = Some(correct);
        let notification = if correct {
            self.score += 1;
            Notification::success(format!(
                "Richtig! {} kommt aus {}! 🎉",
                animal.name, guess.name
            ))
        } else {
            Notification::error(format!(
                "Nicht ganz! {} kommt aus {}. 🤔",
                animal.name, animal.continent
            ))
        };
        self.emitter.emit(GameEvent::Notify(notification));
        self.emitter.emit(GameEvent::Updated(GameId::Animals));
    }

    fn advance(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        match self.last_guess_correct.take() {
            Some(true) => {
                self.next_animal();
                self.emitter.emit(GameEvent::Updated(GameId::Animals));
            }
            Some(false) => {
                self.set_phase(GamePhase::Finished);
                self.emitter.emit(GameEvent::Completed {
                    game: GameId::Animals,
                    score: self.score,
                });
            }
            None => {}
        }
    }

    fn explore(&mut self) {
        self.continent = None;
        self.animal = None;
        self.set_phase(GamePhase::Explore);
    }

    fn select_continent(&mut self, index: usize) {
        if self.phase != GamePhase::Explore {
            return;
        }
        self.continent = CONTINENTS.get(index);
        self.emitter.emit(GameEvent::Updated(GameId::Animals));
    }

    fn learn_animal(&mut self, index: usize) {
        if self.phase != GamePhase::Explore {
            return;
        }
        if let Some(animal) = ANIMALS.get(index) {
            self.animal = Some(animal);
            self.set_phase(GamePhase::Learning);
        }
    }
}

impl EventHandler<AnimalCommand> for AnimalGame {
    fn handle_event(&mut self, event: &AnimalCommand) {
        match event {
            AnimalCommand::StartQuiz => self.start_quiz(),
            AnimalCommand::Guess(continent) => self.guess(*continent),
            AnimalCommand::Continue => self.advance(),
            AnimalCommand::Explore => self.explore(),
            AnimalCommand::SelectContinent(index) => self.select_continent(*index),
            AnimalCommand::LearnAnimal(index) => self.learn_animal(*index),
            AnimalCommand::BackToExplore => {
                if self.phase == GamePhase::Learning {
                    self.set_phase(GamePhase::Explore);
                }
            }
            AnimalCommand::BackToMenu => {
                self.last_guess_correct = None;
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
    use test_context::test_context;

    fn game() -> AnimalGame {
        let (emitter, _observer) = Channel::<GameEvent>::new();
        AnimalGame::new(emitter, Some(12))
    }

    fn continent_index(name: &str) -> usize {
        CONTINENTS.iter().position(|c| c.name == name).unwrap()
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_quiz_runs_until_first_wrong_guess(_: &mut UsingLogger) {
        let mut game = game();
        game.handle_event(&AnimalCommand::StartQuiz);
        for _ in 0..4 {
            let right = continent_index(game.animal().unwrap().continent);
            game.handle_event(&AnimalCommand::Guess(right));
            game.handle_event(&AnimalCommand::Guess(right));
            game.handle_event(&AnimalCommand::Continue);
        }
        assert_eq!(game.score(), 4);

        let right = continent_index(game.animal().unwrap().continent);
        game.handle_event(&AnimalCommand::Guess((right + 1) % CONTINENTS.len()));
        assert_eq!(game.phase(), GamePhase::Playing);
        game.handle_event(&AnimalCommand::Continue);

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.score(), 4);
        assert_eq!(rating(game.score()).emoji, "⭐");
    }

    #[test]
    fn test_explore_and_learn() {
        let mut game = game();
        game.handle_event(&AnimalCommand::Explore);
        game.handle_event(&AnimalCommand::SelectContinent(continent_index("Antarktis")));
        let animals = game.continent_animals();
        assert!(animals.iter().all(|animal| animal.continent == "Antarktis"));

        let index = ANIMALS.iter().position(|a| a == animals[0]).unwrap();
        game.handle_event(&AnimalCommand::LearnAnimal(index));
        assert_eq!(game.phase(), GamePhase::Learning);
        assert_eq!(game.animal(), Some(animals[0]));

        game.handle_event(&AnimalCommand::BackToExplore);
        assert_eq!(game.phase(), GamePhase::Explore);
        assert_eq!(game.selected_continent().unwrap().name, "Antarktis");
    }

    #[test]
    fn test_learning_requires_explore_mode() {
        let mut game = game();
        game.handle_event(&AnimalCommand::LearnAnimal(0));
        assert_eq!(game.phase(), GamePhase::Menu);
    }
}
