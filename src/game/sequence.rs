use super::seeded_rng;
use crate::content::sequence::COLOR_PADS;
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, GamePhase, Notification};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

pub const LEAD_IN: Duration = Duration::from_millis(500);
pub const STEP_GAP: Duration = Duration::from_millis(200);
pub const STEP_LIT: Duration = Duration::from_millis(600);
pub const NEXT_LEVEL_DELAY: Duration = Duration::from_millis(1000);
/// How long a pressed pad stays lit.
pub const PRESS_LIT: Duration = Duration::from_millis(300);
const YOUR_TURN_DURATION: Duration = Duration::from_millis(2000);

/// One pad lighting up during playback, timed from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStep {
    pub pad: usize,
    pub lit_at: Duration,
    pub unlit_at: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceCommand {
    Start,
    PlaybackFinished,
    Press(usize),
    BackToMenu,
}

pub struct SequenceGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    sequence: Vec<usize>,
    input: Vec<usize>,
    level: u32,
    high_score: u32,
    new_record: bool,
}

impl SequenceGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("sequence", seed),
            phase: GamePhase::Menu,
            sequence: Vec::new(),
            input: Vec::new(),
            level: 1,
            high_score: 0,
            new_record: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn playback_schedule(&self) -> Vec<PlaybackStep> {
        let step = STEP_GAP + STEP_LIT;
        self.sequence
            .iter()
            .enumerate()
            .map(|(i, &pad)| {
                let lit_at = LEAD_IN + step * i as u32 + STEP_GAP;
                PlaybackStep {
                    pad,
                    lit_at,
                    unlit_at: lit_at + STEP_LIT,
                }
            })
            .collect()
    }

    /// When `PlaybackFinished` is due, timed from the start of playback.
    pub fn playback_duration(&self) -> Duration {
        LEAD_IN + (STEP_GAP + STEP_LIT) * self.sequence.len() as u32
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Sequence,
            phase,
        });
    }

    fn extend_sequence(&mut self) {
        self.sequence.push(self.rng.random_range(0..COLOR_PADS.len()));
        self.input.clear();
        self.set_phase(GamePhase::Showing);
    }

    fn start(&mut self) {
        self.level = 1;
        self.new_record = false;
        self.sequence.clear();
        self.extend_sequence();
    }

    fn playback_finished(&mut self) {
        if self.phase != GamePhase::Showing {
            return;
        }
        self.set_phase(GamePhase::Playing);
        self.emitter.emit(GameEvent::Notify(
            Notification::info("Jetzt bist du dran! 🎯").with_duration(YOUR_TURN_DURATION),
        ));
    }

    fn press(&mut self, pad: usize) {
        if self.phase != GamePhase::Playing {
            debug!(target: "sequence", "Ignoring pad {} while {:?}", pad, self.phase);
            return;
        }
        self.input.push(pad);
        let position = self.input.len() - 1;

        if self.sequence.get(position) != Some(&pad) {
            self.game_over();
            return;
        }

        if self.input.len() == self.sequence.len() {
            self.emitter.emit(GameEvent::Notify(Notification::success(format!(
                "Level {} geschafft! 🎉",
                self.level
            ))));
            self.level += 1;
            self.extend_sequence();
        } else {
            self.emitter.emit(GameEvent::Updated(GameId::Sequence));
        }
    }

    fn game_over(&mut self) {
        info!(target: "sequence", "Wrong pad at level {}", self.level);
        self.emitter.emit(GameEvent::Notify(Notification::error(
            "Ups! Das war nicht richtig 😅",
        )));
        self.new_record = self.level > self.high_score;
        if self.new_record {
            self.high_score = self.level;
            self.emitter.emit(GameEvent::Notify(Notification::success(format!(
                "Neuer Rekord: Level {}! 🏆",
                self.level
            ))));
        }
        self.set_phase(GamePhase::Finished);
        self.emitter.emit(GameEvent::Completed {
            game: GameId::Sequence,
            score: self.level,
        });
    }
}

impl EventHandler<SequenceCommand> for SequenceGame {
    fn handle_event(&mut self, event: &SequenceCommand) {
        match event {
            SequenceCommand::Start => self.start(),
            SequenceCommand::PlaybackFinished => self.playback_finished(),
            SequenceCommand::Press(pad) => self.press(*pad),
            SequenceCommand::BackToMenu => {
                self.sequence.clear();
                self.input.clear();
                self.set_phase(GamePhase::Menu);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;

    fn game() -> SequenceGame {
        let (emitter, _observer) = Channel::<GameEvent>::new();
        SequenceGame::new(emitter, Some(99))
    }

    fn replay(game: &mut SequenceGame) {
        let sequence = game.sequence().to_vec();
        game.handle_event(&SequenceCommand::PlaybackFinished);
        for pad in sequence {
            game.handle_event(&SequenceCommand::Press(pad));
        }
    }

    #[test]
    fn test_presses_ignored_while_showing() {
        let mut game = game();
        game.handle_event(&SequenceCommand::Start);
        assert_eq!(game.phase(), GamePhase::Showing);
        game.handle_event(&SequenceCommand::Press(0));
        assert_eq!(game.input_len(), 0);
        assert_eq!(game.phase(), GamePhase::Showing);
    }

    #[test]
    fn test_correct_replay_advances_level() {
        let mut game = game();
        game.handle_event(&SequenceCommand::Start);
        replay(&mut game);
        replay(&mut game);
        assert_eq!(game.level(), 3);
        assert_eq!(game.sequence().len(), 3);
        assert_eq!(game.phase(), GamePhase::Showing);
    }

    #[test]
    fn test_wrong_press_ends_game_with_record() {
        let mut game = game();
        game.handle_event(&SequenceCommand::Start);
        replay(&mut game);
        game.handle_event(&SequenceCommand::PlaybackFinished);
        let wrong = (game.sequence()[0] + 1) % COLOR_PADS.len();
        game.handle_event(&SequenceCommand::Press(wrong));

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(game.high_score(), 2);
        assert!(game.is_new_record());

        game.handle_event(&SequenceCommand::Start);
        game.handle_event(&SequenceCommand::PlaybackFinished);
        let wrong = (game.sequence()[0] + 1) % COLOR_PADS.len();
        game.handle_event(&SequenceCommand::Press(wrong));
        assert_eq!(game.high_score(), 2);
        assert!(!game.is_new_record());
    }

    #[test]
    fn test_playback_schedule() {
        let mut game = game();
        game.handle_event(&SequenceCommand::Start);
        replay(&mut game);
        let schedule = game.playback_schedule();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].lit_at, Duration::from_millis(700));
        assert_eq!(schedule[0].unlit_at, Duration::from_millis(1300));
        assert_eq!(schedule[1].lit_at, Duration::from_millis(1500));
        assert_eq!(game.playback_duration(), Duration::from_millis(2100));
    }

    #[test]
    fn test_each_pad_has_its_own_tone() {
        let tones: Vec<f32> = COLOR_PADS.iter().map(|pad| pad.tone_hz).collect();
        assert_eq!(tones, vec![261.63, 329.63, 392.00, 523.25]);
        assert!(PRESS_LIT < NEXT_LEVEL_DELAY);
    }
}
