use super::seeded_rng;
use crate::content::puzzle::{PuzzleTheme, PUZZLE_THEMES};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{Difficulty, GameEvent, GameId, GamePhase, Notification, Rating};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt::Display;
use thiserror::Error;

pub const SHUFFLE_MOVES: usize = 1000;
const MAX_SCORE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("tile {0} is not next to the blank")]
    NotAdjacent(usize),
    #[error("no puzzle in progress")]
    NotPlaying,
}

pub fn board_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 4,
        Difficulty::Hard => 5,
    }
}

pub fn rating(moves: u32) -> Rating {
    match moves {
        0..=49 => Rating::new("🌟", "Fantastisch! Sehr effizient! 🌟"),
        50..=99 => Rating::new("👏", "Super gemacht! 👏"),
        _ => Rating::new("💪", "Gut! Weiter üben! 💪"),
    }
}

pub fn score(moves: u32, elapsed_secs: u32) -> u32 {
    MAX_SCORE.saturating_sub(moves).saturating_sub(elapsed_secs)
}

/// Square sliding-tile board. `None` is the blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBoard {
    size: usize,
    tiles: Vec<Option<usize>>,
}

impl TileBoard {
    pub fn solved(size: usize) -> Self {
        let mut tiles: Vec<Option<usize>> = (0..size * size - 1).map(Some).collect();
        tiles.push(None);
        Self { size, tiles }
    }

    /// Random walk of the blank from the solved board, so the result is always solvable.
    pub fn shuffled(size: usize, rng: &mut StdRng) -> Self {
        loop {
            let mut board = Self::solved(size);
            for _ in 0..SHUFFLE_MOVES {
                let moves = board.possible_moves();
                if let Some(&index) = moves.choose(rng) {
                    board.swap_with_blank(index);
                }
            }
            debug_assert!(board.is_solvable());
            if !board.is_solved() {
                return board;
            }
            trace!(target: "puzzle", "Shuffle returned the solved board; reshuffling");
        }
    }

    pub fn from_tiles(size: usize, tiles: Vec<Option<usize>>) -> Option<Self> {
        (tiles.len() == size * size && tiles.iter().filter(|tile| tile.is_none()).count() == 1)
            .then_some(Self { size, tiles })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Option<usize>] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.tiles.len() - 1)
    }

    /// Indices of the tiles that may slide into the blank.
    pub fn possible_moves(&self) -> Vec<usize> {
        let blank = self.blank_index();
        let (row, col) = (blank / self.size, blank % self.size);
        let mut moves = Vec::with_capacity(4);
        if row > 0 {
            moves.push(blank - self.size);
        }
        if row + 1 < self.size {
            moves.push(blank + self.size);
        }
        if col > 0 {
            moves.push(blank - 1);
        }
        if col + 1 < self.size {
            moves.push(blank + 1);
        }
        moves
    }

    pub fn can_slide(&self, index: usize) -> bool {
        self.possible_moves().contains(&index)
    }

    pub fn slide(&mut self, index: usize) -> Result<(), PuzzleError> {
        if !self.can_slide(index) {
            return Err(PuzzleError::NotAdjacent(index));
        }
        self.swap_with_blank(index);
        Ok(())
    }

    fn swap_with_blank(&mut self, index: usize) {
        let blank = self.blank_index();
        self.tiles.swap(blank, index);
    }

    pub fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles.iter().enumerate().all(|(i, tile)| match tile {
            Some(value) => *value == i,
            None => i == last,
        })
    }

    fn inversions(&self) -> usize {
        let values: Vec<usize> = self.tiles.iter().flatten().copied().collect();
        values
            .iter()
            .enumerate()
            .map(|(i, a)| values[i + 1..].iter().filter(|b| a > *b).count())
            .sum()
    }

    /// Inversion parity test; for even widths the blank's row counts too.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.blank_index() / self.size;
            (inversions + blank_row) % 2 == (self.size - 1) % 2
        }
    }
}

impl Display for TileBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.size) {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| match tile {
                    Some(value) => format!("{:>2}", value + 1),
                    None => " .".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleCommand {
    SelectTheme(usize),
    Start(Difficulty),
    SlideTile(usize),
    Tick,
    Reshuffle,
    BackToMenu,
}

pub struct PuzzleGame {
    emitter: EventEmitter<GameEvent>,
    rng: StdRng,
    phase: GamePhase,
    theme: Option<&'static PuzzleTheme>,
    difficulty: Difficulty,
    board: TileBoard,
    moves: u32,
    elapsed_secs: u32,
}

impl PuzzleGame {
    pub fn new(emitter: EventEmitter<GameEvent>, seed: Option<u64>) -> Self {
        Self {
            emitter,
            rng: seeded_rng("puzzle", seed),
            phase: GamePhase::Menu,
            theme: None,
            difficulty: Difficulty::default(),
            board: TileBoard::solved(board_size(Difficulty::default())),
            moves: 0,
            elapsed_secs: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn theme(&self) -> Option<&'static PuzzleTheme> {
        self.theme
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.emitter.emit(GameEvent::PhaseChanged {
            game: GameId::Puzzle,
            phase,
        });
    }

    fn select_theme(&mut self, index: usize) {
        self.theme = PUZZLE_THEMES.get(index);
        debug!(target: "puzzle", "Theme selected: {:?}", self.theme.map(|theme| theme.id));
        self.emitter.emit(GameEvent::Updated(GameId::Puzzle));
    }

    fn start(&mut self, difficulty: Difficulty) {
        let Some(theme) = self.theme else {
            debug!(target: "puzzle", "Ignoring start without a theme");
            return;
        };
        self.difficulty = difficulty;
        self.board = TileBoard::shuffled(board_size(difficulty), &mut self.rng);
        self.moves = 0;
        self.elapsed_secs = 0;
        info!(target: "puzzle", "New {} board ({}):\n{}", theme.name, difficulty.name(), self.board);
        self.set_phase(GamePhase::Playing);
    }

    fn slide(&mut self, index: usize) -> Result<(), PuzzleError> {
        if self.phase != GamePhase::Playing {
            return Err(PuzzleError::NotPlaying);
        }
        self.board.slide(index)?;
        self.moves += 1;
        self.emitter.emit(GameEvent::Updated(GameId::Puzzle));

        if self.board.is_solved() {
            self.set_phase(GamePhase::Finished);
            self.emitter.emit(GameEvent::Notify(Notification::success(
                "Puzzle gelöst! 🎉🎊",
            )));
            self.emitter.emit(GameEvent::Completed {
                game: GameId::Puzzle,
                score: score(self.moves, self.elapsed_secs),
            });
        }
        Ok(())
    }
}

impl EventHandler<PuzzleCommand> for PuzzleGame {
    fn handle_event(&mut self, event: &PuzzleCommand) {
        match event {
            PuzzleCommand::SelectTheme(index) => self.select_theme(*index),
            PuzzleCommand::Start(difficulty) => self.start(*difficulty),
            PuzzleCommand::SlideTile(index) => match self.slide(*index) {
                Ok(()) => {}
                Err(PuzzleError::NotAdjacent(_)) => {
                    self.emitter.emit(GameEvent::Notify(Notification::error(
                        "Diese Kachel kann nicht bewegt werden! 🚫",
                    )));
                }
                Err(err) => debug!(target: "puzzle", "Ignoring slide: {}", err),
            },
            PuzzleCommand::Tick => {
                if self.phase == GamePhase::Playing {
                    self.elapsed_secs += 1;
                    self.emitter.emit(GameEvent::Updated(GameId::Puzzle));
                }
            }
            PuzzleCommand::Reshuffle => self.start(self.difficulty),
            PuzzleCommand::BackToMenu => {
                self.theme = None;
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

    fn game() -> (PuzzleGame, Rc<RefCell<Vec<GameEvent>>>) {
        let (emitter, observer) = Channel::<GameEvent>::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        observer.subscribe(move |event| events_clone.borrow_mut().push(event.clone()));
        (PuzzleGame::new(emitter, Some(17)), events)
    }

    #[test]
    fn test_shuffled_boards_are_solvable_and_unsolved() {
        let mut rng = StdRng::seed_from_u64(1);
        for size in 3..=5 {
            for _ in 0..20 {
                let board = TileBoard::shuffled(size, &mut rng);
                assert!(board.is_solvable(), "unsolvable:\n{}", board);
                assert!(!board.is_solved());
                assert_eq!(board.tiles().len(), size * size);
            }
        }
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        for size in 3..=4 {
            let mut tiles = TileBoard::solved(size).tiles().to_vec();
            tiles.swap(0, 1);
            let board = TileBoard::from_tiles(size, tiles).unwrap();
            assert!(!board.is_solvable());
        }
        assert!(TileBoard::solved(4).is_solvable());
    }

    #[test]
    fn test_possible_moves_from_corner_and_centre() {
        let board = TileBoard::solved(3);
        let mut moves = board.possible_moves();
        moves.sort();
        assert_eq!(moves, vec![5, 7]);

        let tiles = vec![
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            None,
            Some(4),
            Some(5),
            Some(6),
            Some(7),
        ];
        let board = TileBoard::from_tiles(3, tiles).unwrap();
        let mut moves = board.possible_moves();
        moves.sort();
        assert_eq!(moves, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_illegal_slide_leaves_board_untouched() {
        let mut board = TileBoard::solved(3);
        let before = board.clone();
        assert_eq!(board.slide(0), Err(PuzzleError::NotAdjacent(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_start_requires_theme() {
        let (mut game, _) = game();
        game.handle_event(&PuzzleCommand::Start(Difficulty::Easy));
        assert_eq!(game.phase(), GamePhase::Menu);

        game.handle_event(&PuzzleCommand::SelectTheme(2));
        game.handle_event(&PuzzleCommand::Start(Difficulty::Hard));
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.board().size(), 5);
        assert_eq!(game.theme().unwrap().id, "animals");
    }

    #[test]
    fn test_reshuffle_keeps_theme_and_size_until_back_to_menu() {
        let (mut game, _) = game();
        game.handle_event(&PuzzleCommand::SelectTheme(4));
        game.handle_event(&PuzzleCommand::Start(Difficulty::Medium));
        let movable = game.board().possible_moves()[0];
        game.handle_event(&PuzzleCommand::SlideTile(movable));
        game.handle_event(&PuzzleCommand::Tick);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.elapsed_secs(), 1);

        game.handle_event(&PuzzleCommand::Reshuffle);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.theme().unwrap().id, "ocean");
        assert_eq!(game.board().size(), 4);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed_secs(), 0);
        assert!(game.board().is_solvable());

        game.handle_event(&PuzzleCommand::BackToMenu);
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.theme().is_none());
        game.handle_event(&PuzzleCommand::Reshuffle);
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.theme().is_none());
    }

    #[test]
    fn test_illegal_move_notifies() {
        let (mut game, events) = game();
        game.handle_event(&PuzzleCommand::SelectTheme(0));
        game.handle_event(&PuzzleCommand::Start(Difficulty::Easy));
        let blank = game.board().blank_index();
        let before = game.board().clone();

        game.handle_event(&PuzzleCommand::SlideTile(blank));
        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
        assert!(events.borrow().iter().any(|event| matches!(
            event,
            GameEvent::Notify(notification) if notification.message == "Diese Kachel kann nicht bewegt werden! 🚫"
        )));
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_solving_completes_with_score(_: &mut UsingLogger) {
        let (mut game, events) = game();
        game.handle_event(&PuzzleCommand::SelectTheme(1));
        game.handle_event(&PuzzleCommand::Start(Difficulty::Easy));

        // one slide away from solved: blank at 7, tile 7 at 8
        let tiles = vec![
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            None,
            Some(7),
        ];
        game.board = TileBoard::from_tiles(3, tiles).unwrap();
        game.handle_event(&PuzzleCommand::Tick);
        game.handle_event(&PuzzleCommand::Tick);
        game.handle_event(&PuzzleCommand::SlideTile(8));

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::Completed {
                game: GameId::Puzzle,
                score: 997
            })
        );
    }

    #[test]
    fn test_score_and_rating() {
        assert_eq!(score(990, 20), 0);
        assert_eq!(rating(49).emoji, "🌟");
        assert_eq!(rating(50).emoji, "👏");
        assert_eq!(rating(100).emoji, "💪");
    }
}
