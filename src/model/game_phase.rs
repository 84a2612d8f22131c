/// Where a game's state machine currently is. Every game uses `Menu`,
/// `Playing` and `Finished`; the others belong to individual games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    /// Sequence game replaying the pattern to memorise.
    Showing,
    Playing,
    /// Animal game browsing continents.
    Explore,
    /// Animal game showing one animal's card.
    Learning,
    Finished,
}

impl GamePhase {
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Showing | GamePhase::Playing)
    }
}
