use super::{GameId, GamePhase, Notification};

/// Emitted by the game engines.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { game: GameId, phase: GamePhase },
    Updated(GameId),
    Notify(Notification),
    /// A scored game reached its finished state.
    Completed { game: GameId, score: u32 },
}
