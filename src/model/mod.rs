mod difficulty;
mod game_event;
mod game_id;
mod game_phase;
mod game_stats;
mod global_event;
mod notification;
mod player_name;
mod rating;
mod route;

pub use difficulty::Difficulty;
pub use game_event::GameEvent;
pub use game_id::GameId;
pub use game_phase::GamePhase;
pub use game_stats::GameStats;
pub use global_event::GlobalEvent;
pub use notification::{Notification, NotificationKind, DEFAULT_NOTIFICATION_DURATION};
pub use player_name::{NameError, PlayerName, DEFAULT_PLAYER_NAME, MAX_NAME_CHARS, MIN_NAME_CHARS};
pub use rating::Rating;
pub use route::Route;
