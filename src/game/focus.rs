use super::seeded_rng;
use crate::events::{EventEmitter, EventHandler};
use crate::model::{Difficulty, GameEvent, GameId, GamePhase, Notification, Rating};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

pub const ROUND_SECS: u32 = 30;
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
const HIT_NOTIFICATION_DURATION: Duration = Duration::from_millis(500);
const MARGIN_PERCENT: f64 = 10.0;
const SPAN_PERCENT: f64 = 80.0;

pub fn move_interval(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Easy => Duration::from_millis(2000),
        Difficulty::Medium => Duration::from_millis(1200),
        Difficulty::Hard => Duration::from_millis(800),
    }
}

pub fn speed_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Langsam",
        Difficulty::Medium => "Mittel",
        Difficulty::Hard => "Schnell",
    }
}

pub fn speed_emoji(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "🐢",
        Difficulty::Medium => "🐰",
        Difficulty::Hard => "🚀",
    }
}

pub fn rating(score: u32) -> Rating {
    match score {
        20.. => Rating::new("🏆", "Unglaublich! Blitzschnelle Reaktion! ⚡"),
        15.. => Rating::new("🌟", "Fantastisch! Super Konzentration! 🎯"),
        10.. => Rating::new("👏", "Gut gemacht! Weiter üben! 💪"),
        _ => Rating::new("💪", "Guter Start! Trainiere weiter! 🎮"),
    }
}

pub fn accuracy(hits: u32, clicks: u32) -> u32 {
    if clicks == 0 {
        return 0;
    }
    (hits as f64 / clicks as f64 * 100.0).round() as u32
}

/// Percent offsets of the target's centre inside the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for TargetPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusCommand {
    Start(Difficulty),
    Tick,
    MoveTarget,
    Hit,
    Miss,
    BackToMenu,
}

pub struct FocusGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    difficulty: Difficulty,
    target: TargetPosition,
    score: u32,
    clicks: u32,
    time_left: u32,
}

impl FocusGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("focus", seed),
            phase: GamePhase::Menu,
            difficulty: Difficulty::default(),
            target: TargetPosition::default(),
            score: 0,
            clicks: 0,
            time_left: ROUND_SECS,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target(&self) -> TargetPosition {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn accuracy(&self) -> u32 {
        accuracy(self.score, self.clicks)
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Focus,
            phase,
        });
    }

    fn move_target(&mut self) {
        self.target = TargetPosition {
            x: self.rng.random::<f64>() * SPAN_PERCENT + MARGIN_PERCENT,
            y: self.rng.random::<f64>() * SPAN_PERCENT + MARGIN_PERCENT,
        };
        trace!(target: "focus", "Target moved to {:?}", self.target);
    }

    fn start(&mut self, difficulty: Difficulty) {
        debug!(target: "focus", "Starting {} round", speed_name(difficulty));
        self.difficulty = difficulty;
        self.score = 0;
        self.clicks = 0;
        self.time_left = ROUND_SECS;
        self.move_target();
        self.set_phase(GamePhase::Playing);
    }

    fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            self.emitter.emit(GameEvent::Updated(GameId::Focus));
            return;
        }
        self.set_phase(GamePhase::Finished);
        self.emitter.emit(GameEvent::Notify(Notification::success(format!(
            "Spiel beendet! {} Punkte! 🎯",
            self.score
        ))));
        self.emitter.emit(GameEvent::Completed {
            game: GameId::Focus,
            score: self.score,
        });
    }

    fn hit(&mut self) {
        self.score += 1;
        self.clicks += 1;
        self.move_target();
        self.emitter.emit(GameEvent::Notify(
            Notification::success("Getroffen! +1 🎯").with_duration(HIT_NOTIFICATION_DURATION),
        ));
        self.emitter.emit(GameEvent::Updated(GameId::Focus));
    }
}

impl EventHandler<FocusCommand> for FocusGame {
    fn handle_event(&mut self, event: &FocusCommand) {
        let playing = self.phase == GamePhase::Playing;
        match event {
            FocusCommand::Start(difficulty) => self.start(*difficulty),
            FocusCommand::Tick => self.tick(),
            FocusCommand::MoveTarget if playing => {
                self.move_target();
                self.emitter.emit(GameEvent::Updated(GameId::Focus));
            }
            FocusCommand::Hit if playing => self.hit(),
            FocusCommand::Miss if playing => {
                self.clicks += 1;
                self.emitter.emit(GameEvent::Updated(GameId::Focus));
            }
            FocusCommand::BackToMenu => self.set_phase(GamePhase::Menu),
            _ => debug!(target: "focus", "Ignoring {:?} while {:?}", event, self.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn game() -> (FocusGame, Rc<RefCell<Vec<GameEvent>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        observer.subscribe(move |event| events_clone.borrow_mut().push(event.clone()));
        (FocusGame::new(emitter, Some(8)), events)
    }

    #[test]
    fn test_target_stays_inside_margins() {
        let (mut game, _) = game();
        game.handle_event(&FocusCommand::Start(Difficulty::Hard));
        for _ in 0..500 {
            game.handle_event(&FocusCommand::MoveTarget);
            let target = game.target();
            assert!((10.0..=90.0).contains(&target.x));
            assert!((10.0..=90.0).contains(&target.y));
        }
    }

    #[test]
    fn test_round_ends_after_thirty_ticks() {
        let (mut game, events) = game();
        game.handle_event(&FocusCommand::Start(Difficulty::Easy));
        game.handle_event(&FocusCommand::Hit);
        game.handle_event(&FocusCommand::Hit);
        game.handle_event(&FocusCommand::Miss);
        for _ in 0..29 {
            game.handle_event(&FocusCommand::Tick);
        }
        assert_eq!(game.phase(), GamePhase::Playing);
        game.handle_event(&FocusCommand::Tick);

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.accuracy(), 67);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::Completed {
                game: GameId::Focus,
                score: 2
            })
        );

        game.handle_event(&FocusCommand::Hit);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_accuracy_without_clicks() {
        assert_eq!(accuracy(0, 0), 0);
        assert_eq!(accuracy(3, 4), 75);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating(20).emoji, "🏆");
        assert_eq!(rating(15).emoji, "🌟");
        assert_eq!(rating(10).emoji, "👏");
        assert_eq!(rating(9).emoji, "💪");
    }
}
