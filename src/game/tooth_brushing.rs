use crate::content::tooth_brushing::{BrushingStep, BRUSHING_STEPS, TEETH_AREAS};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, GamePhase, Notification};
use log::{debug, info};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const POINTS_PER_AREA: u32 = 10;
pub const COMPLETION_BONUS: u32 = 50;
const BRUSHING_STEPS_WITH_AREAS: RangeInclusive<usize> = 1..=3;
const AREA_NOTIFICATION_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrushingCommand {
    Start,
    Tick,
    NextStep,
    BrushArea(usize),
    BackToMenu,
}

pub struct ToothBrushingGame {
    emitter: EventEmitter<GameEvent>,
    phase: GamePhase,
    step: usize,
    time_left: u32,
    brushed: Vec<usize>,
    points: u32,
}

impl ToothBrushingGame {
    pub fn new(emitter: EventEmitter<GameEvent>) -> Self {
        Self {
            emitter,
            phase: GamePhase::Menu,
            step: 0,
            time_left: BRUSHING_STEPS[0].duration_secs,
            brushed: Vec::new(),
            points: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step(&self) -> &'static BrushingStep {
        &BRUSHING_STEPS[self.step]
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Whether the current step shows the mouth areas.
    pub fn shows_areas(&self) -> bool {
        BRUSHING_STEPS_WITH_AREAS.contains(&self.step)
    }

    pub fn is_brushed(&self, area: usize) -> bool {
        self.brushed.contains(&area)
    }

    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / BRUSHING_STEPS.len() as f64
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::ToothBrushing,
            phase,
        });
    }

    fn start(&mut self) {
        self.step = 0;
        self.time_left = BRUSHING_STEPS[0].duration_secs;
        self.brushed.clear();
        self.points = 0;
        self.set_phase(GamePhase::Playing);
    }

    fn tick(&mut self) {
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.next_step();
        } else {
            self.emitter.emit(GameEvent::Updated(GameId::ToothBrushing));
        }
    }

    fn next_step(&mut self) {
        if self.step + 1 < BRUSHING_STEPS.len() {
            if self.shows_areas() {
                self.points += self.brushed.len() as u32 * POINTS_PER_AREA;
                self.brushed.clear();
            }
            self.step += 1;
            self.time_left = BRUSHING_STEPS[self.step].duration_secs;
            debug!(target: "tooth_brushing", "Step {}: {}", self.step, self.step().title);
            self.emitter.emit(GameEvent::Updated(GameId::ToothBrushing));
            return;
        }

        self.points += COMPLETION_BONUS;
        info!(target: "tooth_brushing", "Finished with {} points", self.points);
        self.set_phase(GamePhase::Finished);
        self.emitter.emit(GameEvent::Notify(Notification::success(
            "Perfekt geputzt! 🦷✨",
        )));
        self.emitter.emit(GameEvent::Completed {
            game: GameId::ToothBrushing,
            score: self.points,
        });
    }

    fn brush_area(&mut self, area: usize) {
        if area >= TEETH_AREAS.len() || !self.shows_areas() || self.is_brushed(area) {
            return;
        }
        self.brushed.push(area);
        self.emitter.emit(GameEvent::Notify(
            Notification::success("Gut geputzt! ⭐").with_duration(AREA_NOTIFICATION_DURATION),
        ));
        self.emitter.emit(GameEvent::Updated(GameId::ToothBrushing));
    }
}

impl EventHandler<BrushingCommand> for ToothBrushingGame {
    fn handle_event(&mut self, event: &BrushingCommand) {
        let brushing = self.phase == GamePhase::Playing;
        match event {
            BrushingCommand::Start => self.start(),
            BrushingCommand::Tick if brushing => self.tick(),
            BrushingCommand::NextStep if brushing => self.next_step(),
            BrushingCommand::BrushArea(area) if brushing => self.brush_area(*area),
            BrushingCommand::BackToMenu => self.set_phase(GamePhase::Menu),
            _ => debug!(target: "tooth_brushing", "Ignoring {:?} while {:?}", event, self.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn game() -> (ToothBrushingGame, Rc<RefCell<Vec<GameEvent>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        observer.subscribe(move |event| events_clone.borrow_mut().push(event.clone()));
        (ToothBrushingGame::new(emitter), events)
    }

    #[test]
    fn test_ticks_advance_steps() {
        let (mut game, _) = game();
        game.handle_event(&BrushingCommand::Start);
        assert_eq!(game.time_left(), 5);
        for _ in 0..5 {
            game.handle_event(&BrushingCommand::Tick);
        }
        assert_eq!(game.step_index(), 1);
        assert_eq!(game.time_left(), 30);
    }

    #[test]
    fn test_areas_only_count_during_brushing_steps() {
        let (mut game, _) = game();
        game.handle_event(&BrushingCommand::Start);
        game.handle_event(&BrushingCommand::BrushArea(0));
        assert!(!game.is_brushed(0));

        game.handle_event(&BrushingCommand::NextStep);
        game.handle_event(&BrushingCommand::BrushArea(0));
        game.handle_event(&BrushingCommand::BrushArea(0));
        game.handle_event(&BrushingCommand::BrushArea(3));
        game.handle_event(&BrushingCommand::BrushArea(42));
        game.handle_event(&BrushingCommand::NextStep);

        assert_eq!(game.points(), 20);
        assert!(!game.is_brushed(0));
    }

    #[test]
    fn test_full_routine_scores_all_areas_plus_bonus() {
        let (mut game, events) = game();
        game.handle_event(&BrushingCommand::Start);
        game.handle_event(&BrushingCommand::NextStep);
        for _ in 0..3 {
            for area in 0..TEETH_AREAS.len() {
                game.handle_event(&BrushingCommand::BrushArea(area));
            }
            game.handle_event(&BrushingCommand::NextStep);
        }
        game.handle_event(&BrushingCommand::NextStep);
        assert_eq!(game.phase(), GamePhase::Playing);
        game.handle_event(&BrushingCommand::NextStep);

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.points(), 3 * 6 * POINTS_PER_AREA + COMPLETION_BONUS);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::Completed {
                game: GameId::ToothBrushing,
                score: 230
            })
        );
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let (mut game, events) = game();
        game.handle_event(&BrushingCommand::Tick);
        game.handle_event(&BrushingCommand::NextStep);
        assert_eq!(game.step_index(), 0);
        assert!(events.borrow().is_empty());
    }
}
