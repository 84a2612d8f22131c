use super::stats_manager::StatsManager;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{GameEvent, GameId, GlobalEvent};
use log::error;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every completed play reported on the game event channel.
pub struct StatsRecorder {
    subscription: Option<Unsubscriber<GameEvent>>,
}

impl Destroyable for StatsRecorder {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl StatsRecorder {
    pub fn new(
        stats_manager: Rc<RefCell<StatsManager>>,
        game_event_observer: EventObserver<GameEvent>,
        global_event_emitter: EventEmitter<GlobalEvent>,
    ) -> Self {
        let subscription = game_event_observer.subscribe(move |event| {
            if let GameEvent::Completed { game, score } = event {
                StatsRecorder::record(&stats_manager, &global_event_emitter, *game, *score);
            }
        });
        Self {
            subscription: Some(subscription),
        }
    }

    fn record(
        stats_manager: &Rc<RefCell<StatsManager>>,
        global_event_emitter: &EventEmitter<GlobalEvent>,
        game: GameId,
        score: u32,
    ) {
        let result = stats_manager.borrow_mut().record(game, score);
        match result {
            Ok(_) => global_event_emitter.emit(GlobalEvent::StatsChanged(game)),
            Err(err) => error!(target: "stats", "Failed to record {} for {}: {}", score, game, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use crate::storage::MemoryStore;
    use std::cell::Cell;

    #[test]
    fn test_completed_events_are_recorded() {
        let (game_emitter, game_observer) = Channel::<GameEvent>::new();
        let (global_emitter, global_observer) = Channel::<GlobalEvent>::new();
        let stats = Rc::new(RefCell::new(StatsManager::new(Rc::new(MemoryStore::new()))));
        let changes = Rc::new(Cell::new(0));
        let changes_clone = changes.clone();
        global_observer.subscribe(move |event| {
            if matches!(event, GlobalEvent::StatsChanged(GameId::Focus)) {
                changes_clone.set(changes_clone.get() + 1);
            }
        });

        let mut recorder = StatsRecorder::new(stats.clone(), game_observer, global_emitter);
        game_emitter.emit(GameEvent::Updated(GameId::Focus));
        game_emitter.emit(GameEvent::Completed {
            game: GameId::Focus,
            score: 12,
        });

        assert_eq!(stats.borrow().get(GameId::Focus).unwrap().best_score, 12);
        assert_eq!(changes.get(), 1);

        recorder.destroy();
        game_emitter.emit(GameEvent::Completed {
            game: GameId::Focus,
            score: 30,
        });
        assert_eq!(stats.borrow().get(GameId::Focus).unwrap().games_played, 1);
    }
}
