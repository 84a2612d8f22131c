use crate::events::EventEmitter;
use crate::game::profile::PlayerProfile;
use crate::game::settings::Settings;
use crate::game::stats_manager::StatsManager;
use crate::model::{GameEvent, GlobalEvent, PlayerName};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles every page is built with.
#[derive(Clone)]
pub struct PageContext {
    pub game_events: EventEmitter<GameEvent>,
    pub global_events: EventEmitter<GlobalEvent>,
    pub profile: Rc<RefCell<PlayerProfile>>,
    pub stats: Rc<RefCell<StatsManager>>,
    pub settings: Rc<RefCell<Settings>>,
    pub seed: Option<u64>,
}

impl PageContext {
    /// Current player name, if one has been chosen.
    pub fn player_name(&self) -> Option<PlayerName> {
        self.profile.borrow().name().cloned()
    }
}

/// One screen of the app, mounted in the window's stack.
pub trait Page {
    fn widget(&self) -> gtk4::Widget;

    /// Called whenever the route switches to this page.
    fn enter(&self) {}

    /// Called when the route switches away; pending timers must not survive this.
    fn leave(&self) {}
}
