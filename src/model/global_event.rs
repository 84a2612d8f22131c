use super::{GameId, PlayerName, Route};
use crate::game::settings::Settings;

/// Events that are not specific to any one game.
#[derive(Debug, Clone)]
pub enum GlobalEvent {
    Navigate(Route),
    PlayerNameChanged(PlayerName),
    SettingsChanged(Settings),
    StatsChanged(GameId),
}
